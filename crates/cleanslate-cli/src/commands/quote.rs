use chrono::Local;
use cleanslate_core::quotes::{quote_of_the_day, random_quote};

pub fn run(today: bool) -> Result<(), Box<dyn std::error::Error>> {
    let quote = if today {
        quote_of_the_day(Local::now().date_naive())
    } else {
        random_quote(&mut rand::thread_rng())
    };
    println!("{quote}");
    Ok(())
}
