//! Motivational quotes for the dashboard header and daily notification.

use rand::seq::SliceRandom;
use rand::Rng;

pub const QUOTES: [&str; 10] = [
    "Every day free is a victory! Stay strong! 💪",
    "You are stronger than you think! 🌟",
    "Progress can be slow, but never give up! 🚀",
    "Your determination is inspiring! Keep going! ✨",
    "Every moment counts. You're on the right path! 🎯",
    "Believe in yourself. You can do it! 💫",
    "Your journey is unique and valuable! 🌈",
    "Strength and courage! You're not alone! 🤝",
    "Celebrate every small victory! 🎉",
    "You're building a better future! 🌅",
];

/// Pick a quote using the given RNG.
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}

/// Stable quote for a calendar day, so the daily notification does not
/// change between launches.
pub fn quote_of_the_day(date: chrono::NaiveDate) -> &'static str {
    use chrono::Datelike;
    QUOTES[date.num_days_from_ce().rem_euclid(QUOTES.len() as i32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;

    #[test]
    fn random_quote_comes_from_the_list() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(QUOTES.contains(&random_quote(&mut rng)));
        }
    }

    #[test]
    fn quote_of_the_day_is_stable_and_rotates() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 14).unwrap();
        let tomorrow = today.succ_opt().unwrap();
        assert_eq!(quote_of_the_day(today), quote_of_the_day(today));
        assert_ne!(quote_of_the_day(today), quote_of_the_day(tomorrow));
    }
}
