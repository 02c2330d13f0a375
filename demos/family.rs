use domain_model::{
    error::Result,
    Family, Job, JobType, Money, Person,
};
use rust_decimal_macros::dec;

fn example() -> Result<Family> {
    let ted = Person::build_ref(Person::builder().first_name("Ted").last_name("Neward").age(45))?;
    let charlotte = Person::build_ref(Person::builder().first_name("Charlotte").last_name("Neward").age(45))?;

    // marry them off and put them both to work
    let mut family = Family::try_new(&ted, &charlotte)?;
    ted.borrow_mut().set_job(Some(Job::new("Guest Lecturer", JobType::Salary(1000))));
    charlotte.borrow_mut().set_job(Some(Job::new("Consultant", JobType::Hourly(dec!(15.0)))));

    // kids can't work, no matter how hard they try
    let mike = Person::new("Mike", "Neward", 3).into_ref();
    mike.borrow_mut().set_job(Some(Job::new("Burger Flipper", JobType::Hourly(dec!(7.25)))));
    family.have_child(mike);

    if let Some(job) = charlotte.borrow_mut().job_mut() {
        job.raise_by_percent(dec!(0.1))?;
    }

    // a second wedding goes nowhere
    let sam = Person::new("Sam", "Jones", 30).into_ref();
    let bigamy = Family::new(&ted, &sam);
    assert!(bigamy.is_empty());

    Ok(family)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let family = example()?;
    for member in family.members() {
        println!("{}", member.borrow().describe());
    }
    let income = Money::new(family.household_income(), "USD");
    println!("household income: {} ({} / {})", income, income.convert("GBP")?, income.convert("EUR")?);
    Ok(())
}
