//! A person can hold a job and be married, but only once they're an adult.
//! Trying to give a minor a job or a spouse doesn't fail, it just doesn't take.
//!
//! People are shared (a spouse points at them, a family lists them) so they
//! usually live behind a [PersonRef]. The spouse link is weak: it records a
//! relationship, it doesn't own anybody. Keeping both sides of a marriage in
//! sync is up to the caller (see [Family]).
//!
//! [PersonRef]: type.PersonRef.html
//! [Family]: ../family/struct.Family.html

use crate::{
    error::{Error, Result},
    models::job::Job,
};
use getset::{CopyGetters, Getters, Setters};
use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};
use tracing::debug;

/// Minimum age for holding a job or a spouse.
pub const ADULT_AGE: i32 = 18;

/// A shared handle to a person.
pub type PersonRef = Rc<RefCell<Person>>;

#[derive(Clone, Debug, Getters, CopyGetters, Setters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into))]
pub struct Person {
    #[getset(get = "pub", set = "pub")]
    first_name: String,
    #[getset(get = "pub", set = "pub")]
    last_name: String,
    /// Changing this later does not take away an existing job or spouse.
    #[getset(get_copy = "pub", set = "pub")]
    age: i32,
    #[getset(get = "pub")]
    #[builder(setter(skip))]
    job: Option<Job>,
    #[builder(setter(skip))]
    spouse: Option<Weak<RefCell<Person>>>,
}

impl Person {
    /// Start building a `Person`. There's no way to hand the builder a job
    /// or a spouse: everyone starts out unemployed and unmarried.
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    /// Build a person and wrap them in a shared handle in one go.
    pub fn build_ref(builder: PersonBuilder) -> Result<PersonRef> {
        let person = builder.build().map_err(Error::BuilderFailed)?;
        Ok(person.into_ref())
    }

    /// Create a new person with no job and no spouse.
    pub fn new<F, L>(first_name: F, last_name: L, age: i32) -> Self
        where F: Into<String>,
              L: Into<String>,
    {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            job: None,
            spouse: None,
        }
    }

    /// Wrap this person in a shared handle.
    pub fn into_ref(self) -> PersonRef {
        Rc::new(RefCell::new(self))
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Give this person a job (or take it away with `None`). Minors always end
    /// up with no job.
    pub fn set_job(&mut self, job: Option<Job>) -> &mut Self {
        if self.is_adult() {
            self.job = job;
        } else {
            if job.is_some() {
                debug!("Person::set_job() -- {} is too young for a job", self.first_name);
            }
            self.job = None;
        }
        self
    }

    /// Get a mutable ref to this person's current job, if any (ie, to give
    /// them a raise).
    pub fn job_mut(&mut self) -> Option<&mut Job> {
        self.job.as_mut()
    }

    /// Get this person's spouse, if they have one (and the spouse is still
    /// around).
    pub fn spouse(&self) -> Option<PersonRef> {
        self.spouse.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_married(&self) -> bool {
        self.spouse().is_some()
    }

    /// Set this person's spouse (or clear it with `None`). Minors always end
    /// up with no spouse. This only sets *our* side of the relationship.
    pub fn set_spouse(&mut self, spouse: Option<&PersonRef>) -> &mut Self {
        if self.is_adult() {
            self.spouse = spouse.map(Rc::downgrade);
        } else {
            if spouse.is_some() {
                debug!("Person::set_spouse() -- {} is too young to marry", self.first_name);
            }
            self.spouse = None;
        }
        self
    }

    /// Describe this person in one line, ie
    /// `[Person: firstName:Ted lastName:Neward age:45 job:Guest Lecturer spouse:Charlotte]`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let job = match &self.job {
            Some(job) => job.title().clone(),
            None => String::from("nil"),
        };
        let spouse = match self.spouse() {
            // married to ourselves, which is allowed (if odd)
            Some(spouse) if std::ptr::eq(spouse.as_ptr(), self) => self.first_name.clone(),
            Some(spouse) => spouse.borrow().first_name().clone(),
            None => String::from("nil"),
        };
        write!(f, "[Person: firstName:{} lastName:{} age:{} job:{} spouse:{}]", self.first_name, self.last_name, self.age, job, spouse)
    }
}
