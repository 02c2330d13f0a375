//! Welcome to the domain model, a small set of types for money, the jobs that
//! pay it, and the people (and families) who hold those jobs.
//!
//! - [Money] is a value type: every operation returns a new `Money`.
//! - [Job] is mutated in place by raises.
//! - [Person] may hold a `Job` and a spouse, but only once they're an adult.
//! - [Family] marries two people and tracks their children.
//!
//! People are shared between families and spouses, so they're handed around
//! as [PersonRef] (`Rc<RefCell<Person>>`). Spouse links are weak and never
//! keep a person alive on their own.
//!
//! [Money]: models/money/struct.Money.html
//! [Job]: models/job/struct.Job.html
//! [Person]: models/person/struct.Person.html
//! [Family]: models/family/struct.Family.html
//! [PersonRef]: models/person/type.PersonRef.html

pub mod error;
pub mod models;
mod util;

pub use models::{
    family::Family,
    job::{Job, JobType},
    money::{Currency, Money},
    person::{Person, PersonRef},
};
