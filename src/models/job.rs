//! A job gives a person a title and a way to get paid, either by the hour or
//! with a flat yearly salary. Raises modify the job in place.

use crate::error::{Error, Result};
use getset::{Getters, Setters};
use rust_decimal::prelude::*;
use std::convert::TryFrom;
use tracing::debug;

/// How a job pays.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum JobType {
    /// Paid per hour worked, at this rate.
    Hourly(Decimal),
    /// Paid a flat amount regardless of hours worked. Never negative.
    Salary(u64),
}

/// Clamp a decimal into an i64, truncating any fractional part.
fn saturating_i64(val: Decimal) -> i64 {
    val.trunc().to_i64().unwrap_or_else(|| {
        if val.is_sign_negative() { i64::MIN } else { i64::MAX }
    })
}

/// Add a raise to a salary. Salaries only go up: a negative raise is an
/// `Error::SalaryUnderflow` no matter how big the salary is.
fn raise_salary(salary: u64, raise: i64) -> Result<u64> {
    let raise = u64::try_from(raise).map_err(|_| Error::SalaryUnderflow)?;
    salary.checked_add(raise).ok_or(Error::SalaryOverflow)
}

#[derive(Clone, Debug, PartialEq, Getters, Setters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub", set = "pub")]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Job {
    /// The job's title, ie "Guest Lecturer"
    title: String,
    /// How this job pays
    job_type: JobType,
}

impl Job {
    pub fn builder() -> JobBuilder {
        JobBuilder::default()
    }

    /// Create a new job.
    pub fn new<T: Into<String>>(title: T, job_type: JobType) -> Self {
        Self {
            title: title.into(),
            job_type,
        }
    }

    /// Calculate what this job pays for the given number of hours. Hourly pay
    /// is truncated to a whole amount, and salaries ignore `hours_worked`
    /// entirely.
    pub fn calculate_income(&self, hours_worked: i64) -> i64 {
        match &self.job_type {
            JobType::Hourly(rate) => {
                match Decimal::from(hours_worked).checked_mul(*rate) {
                    Some(income) => saturating_i64(income),
                    None if (hours_worked < 0) != rate.is_sign_negative() => i64::MIN,
                    None => i64::MAX,
                }
            }
            JobType::Salary(salary) => i64::try_from(*salary).unwrap_or(i64::MAX),
        }
    }

    /// Raise this job's pay by a flat amount. An hourly rate goes up by
    /// `amount` per hour, a salary by `amount` per year.
    ///
    /// Hourly rates can be lowered with a negative amount. Salaries can't:
    /// any negative amount returns `Error::SalaryUnderflow` and leaves the job
    /// alone.
    pub fn raise_by_amount(&mut self, amount: i64) -> Result<()> {
        let job_type = match &self.job_type {
            JobType::Hourly(rate) => {
                JobType::Hourly(rate.checked_add(Decimal::from(amount)).ok_or(Error::AmountOutOfRange)?)
            }
            JobType::Salary(salary) => JobType::Salary(raise_salary(*salary, amount)?),
        };
        debug!("Job::raise_by_amount() -- {}: {:?} -> {:?}", self.title, self.job_type, job_type);
        self.job_type = job_type;
        Ok(())
    }

    /// Raise this job's pay by a fractional amount. The fraction is dropped
    /// (toward zero) before the raise is applied, for hourly jobs as well.
    pub fn raise_by_fractional_amount(&mut self, amount: Decimal) -> Result<()> {
        let whole = amount.trunc().to_i64().ok_or(Error::AmountOutOfRange)?;
        self.raise_by_amount(whole)
    }

    /// Raise this job's pay by a percentage, where `dec!(0.1)` is 10%.
    ///
    /// Hourly rates keep their fractional part. Salary raises are truncated
    /// toward zero to a whole amount, and a raise that truncates to anything
    /// below zero is an `Error::SalaryUnderflow`.
    pub fn raise_by_percent(&mut self, percent: Decimal) -> Result<()> {
        let job_type = match &self.job_type {
            JobType::Hourly(rate) => {
                let new_rate = rate.checked_mul(percent)
                    .and_then(|raise| rate.checked_add(raise))
                    .ok_or(Error::AmountOutOfRange)?;
                JobType::Hourly(new_rate)
            }
            JobType::Salary(salary) => {
                let raise = Decimal::from(*salary).checked_mul(percent)
                    .ok_or(Error::SalaryOverflow)?
                    .trunc();
                if raise < Decimal::zero() {
                    Err(Error::SalaryUnderflow)?;
                }
                let raise = raise.to_u64().ok_or(Error::SalaryOverflow)?;
                JobType::Salary(salary.checked_add(raise).ok_or(Error::SalaryOverflow)?)
            }
        };
        debug!("Job::raise_by_percent() -- {}: {:?} -> {:?}", self.title, self.job_type, job_type);
        self.job_type = job_type;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;
    use rust_decimal_macros::dec;

    #[test]
    fn builds() {
        let job = Job::builder()
            .title("Guest Lecturer")
            .job_type(JobType::Hourly(dec!(25.5)))
            .build().unwrap();
        assert_eq!(job, Job::new("Guest Lecturer", JobType::Hourly(dec!(25.5))));
        assert_eq!(job.title(), "Guest Lecturer");

        let res = Job::builder().title("Nobody").build();
        assert!(res.is_err());
    }

    #[test]
    fn calculates_income() {
        let salary = make_salary_job("Guest Lecturer", 1000);
        assert_eq!(salary.calculate_income(0), 1000);
        assert_eq!(salary.calculate_income(50), 1000);
        assert_eq!(salary.calculate_income(2000), 1000);
        assert_eq!(salary.calculate_income(-10), 1000);

        let hourly = make_hourly_job("Janitor", dec!(10.0));
        assert_eq!(hourly.calculate_income(100), 1000);
        assert_eq!(hourly.calculate_income(0), 0);

        let hourly = make_hourly_job("Janitor", dec!(15.75));
        assert_eq!(hourly.calculate_income(10), 157);
        assert_eq!(hourly.calculate_income(2000), 31500);
        assert_eq!(hourly.calculate_income(-10), -157);

        let huge = make_salary_job("Emperor", u64::MAX);
        assert_eq!(huge.calculate_income(1), i64::MAX);
    }

    #[test]
    fn raises_by_amount() {
        let mut hourly = make_hourly_job("Janitor", dec!(15.0));
        hourly.raise_by_amount(1).unwrap();
        assert_eq!(hourly.job_type(), &JobType::Hourly(dec!(16.0)));
        hourly.raise_by_amount(-3).unwrap();
        assert_eq!(hourly.job_type(), &JobType::Hourly(dec!(13.0)));

        let mut salary = make_salary_job("Guest Lecturer", 1000);
        salary.raise_by_amount(1000).unwrap();
        assert_eq!(salary.calculate_income(0), 2000);
        salary.raise_by_amount(0).unwrap();
        assert_eq!(salary.calculate_income(0), 2000);
    }

    #[test]
    fn raise_salary_underflow() {
        let mut salary = make_salary_job("Guest Lecturer", 1000);
        for amount in &[-1, -500, -1000, -1001, i64::MIN] {
            let res = salary.raise_by_amount(*amount);
            assert_eq!(res, Err(Error::SalaryUnderflow));
            assert_eq!(salary.job_type(), &JobType::Salary(1000));
        }

        let res = salary.raise_by_fractional_amount(dec!(-1.5));
        assert_eq!(res, Err(Error::SalaryUnderflow));
        assert_eq!(salary.job_type(), &JobType::Salary(1000));

        let mut huge = make_salary_job("Emperor", u64::MAX);
        assert_eq!(huge.raise_by_amount(1), Err(Error::SalaryOverflow));
    }

    #[test]
    fn raises_by_fractional_amount() {
        let mut hourly = make_hourly_job("Janitor", dec!(15.0));
        hourly.raise_by_fractional_amount(dec!(1.5)).unwrap();
        assert_eq!(hourly.job_type(), &JobType::Hourly(dec!(16.0)));

        let mut salary = make_salary_job("Guest Lecturer", 1000);
        salary.raise_by_fractional_amount(dec!(99.99)).unwrap();
        assert_eq!(salary.job_type(), &JobType::Salary(1099));
        salary.raise_by_fractional_amount(dec!(-0.9)).unwrap();
        assert_eq!(salary.job_type(), &JobType::Salary(1099));
    }

    #[test]
    fn raises_by_percent() {
        let mut hourly = make_hourly_job("Janitor", dec!(10.0));
        hourly.raise_by_percent(dec!(0.15)).unwrap();
        assert_eq!(hourly.job_type(), &JobType::Hourly(dec!(11.5)));
        assert_eq!(hourly.calculate_income(10), 115);

        let mut salary = make_salary_job("Guest Lecturer", 1000);
        salary.raise_by_percent(dec!(0.1)).unwrap();
        assert_eq!(salary.job_type(), &JobType::Salary(1100));
        salary.raise_by_percent(dec!(0.001)).unwrap();
        assert_eq!(salary.job_type(), &JobType::Salary(1101));

        // a cut that truncates to zero is a no-op, anything bigger fails
        salary.raise_by_percent(dec!(-0.0005)).unwrap();
        assert_eq!(salary.job_type(), &JobType::Salary(1101));
        for percent in &[dec!(-0.001), dec!(-0.5), dec!(-1.5)] {
            let res = salary.raise_by_percent(*percent);
            assert_eq!(res, Err(Error::SalaryUnderflow));
            assert_eq!(salary.job_type(), &JobType::Salary(1101));
        }

        let mut huge = make_salary_job("Emperor", u64::MAX);
        assert_eq!(huge.raise_by_percent(dec!(0.5)), Err(Error::SalaryOverflow));
        assert_eq!(huge.job_type(), &JobType::Salary(u64::MAX));
    }

    #[test]
    fn setters() {
        let mut job = make_salary_job("Guest Lecturer", 1000);
        job.set_title("Professor".into());
        job.set_job_type(JobType::Hourly(dec!(40)));
        assert_eq!(job.title(), "Professor");
        assert_eq!(job.calculate_income(3), 120);
    }
}
