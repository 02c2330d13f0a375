//! A family starts with a married couple and grows by having children. The
//! founders marry each other when the family is formed, so neither can already
//! be married.

use crate::{
    error::{Error, Result},
    models::person::PersonRef,
};
use getset::Getters;
use tracing::{debug, warn};

/// How many hours a year of work we assume when totaling household income.
pub const HOURS_PER_YEAR: i64 = 2000;

/// At least one founder must be older than this to have a child.
pub const PARENT_AGE: i32 = 21;

#[derive(Clone, Debug, Default, Getters)]
#[getset(get = "pub")]
pub struct Family {
    /// Everyone in the family. The founding couple (when there is one) is
    /// always at index 0 and 1, followed by children in the order they
    /// arrived.
    members: Vec<PersonRef>,
}

impl Family {
    /// Form a new family, marrying the two founders to each other.
    ///
    /// If either founder is already married this prints a message and returns
    /// a family with no members, leaving both founders untouched. Use
    /// `try_new()` if you'd rather have an error.
    pub fn new(spouse1: &PersonRef, spouse2: &PersonRef) -> Self {
        match Self::try_new(spouse1, spouse2) {
            Ok(family) => family,
            Err(err) => {
                warn!("Family::new() -- {}", err);
                println!("{}", err);
                Self::default()
            }
        }
    }

    /// Form a new family, marrying the two founders to each other. Returns
    /// `Error::AlreadyMarried` if either founder already has a spouse.
    pub fn try_new(spouse1: &PersonRef, spouse2: &PersonRef) -> Result<Self> {
        if spouse1.borrow().is_married() || spouse2.borrow().is_married() {
            Err(Error::AlreadyMarried)?;
        }
        spouse1.borrow_mut().set_spouse(Some(spouse2));
        spouse2.borrow_mut().set_spouse(Some(spouse1));
        Ok(Self {
            members: vec![spouse1.clone(), spouse2.clone()],
        })
    }

    /// Returns true if this family has no members (ie, it failed to form).
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Add a child to the family. Only works if one of the founders is older
    /// than `PARENT_AGE`; returns whether the child was added.
    pub fn have_child(&mut self, child: PersonRef) -> bool {
        let of_age = match (self.members.get(0), self.members.get(1)) {
            (Some(spouse1), Some(spouse2)) => {
                spouse1.borrow().age() > PARENT_AGE || spouse2.borrow().age() > PARENT_AGE
            }
            _ => false,
        };
        if !of_age {
            debug!("Family::have_child() -- no founder older than {}, refusing {}", PARENT_AGE, child.borrow().first_name());
            return false;
        }
        self.members.push(child);
        true
    }

    /// Total yearly income of every member with a job, assuming
    /// `HOURS_PER_YEAR` hours worked.
    pub fn household_income(&self) -> i64 {
        self.members.iter()
            .filter_map(|member| {
                member.borrow().job().as_ref().map(|job| job.calculate_income(HOURS_PER_YEAR))
            })
            .fold(0, |acc, income| acc.saturating_add(income))
    }
}
