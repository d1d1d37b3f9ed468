use chrono::{DateTime, Utc};

use crate::addiction::Addiction;
use crate::progress::{compute_elapsed, compute_savings};
use crate::storage::Currency;

const NO_ADDICTIONS: &str = "The user has not registered any addictions yet.";

/// One context line per addiction: name, emoji, clean days and money saved.
pub fn summarize(addictions: &[Addiction], currency: Currency, now: DateTime<Utc>) -> String {
    if addictions.is_empty() {
        return NO_ADDICTIONS.to_string();
    }

    addictions
        .iter()
        .map(|a| {
            let days = compute_elapsed(a.start_date, now).days;
            let saved = compute_savings(&a.losses, days).saved.unwrap_or(0.0);
            format!(
                "- {} {}: {} days clean, saved {} {:.2}",
                a.name,
                a.emoji,
                days,
                currency.symbol(),
                saved
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Opening assistant message for a new conversation.
pub fn greeting(addictions: &[Addiction], now: DateTime<Utc>) -> String {
    if addictions.is_empty() {
        return "Hi! I'm your support assistant, here to help you stay strong on your journey. \
                How are you feeling today? 💙"
            .to_string();
    }

    let total_days: u64 = addictions
        .iter()
        .map(|a| compute_elapsed(a.start_date, now).days)
        .sum();
    format!(
        "Hi! I see you're already {total_days} days into your recovery journey. \
         That's amazing! 🌟 How can I help you today?"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addiction::{Losses, NewAddiction};
    use chrono::Duration;

    fn addiction(name: &str, days: i64, money: Option<f64>, now: DateTime<Utc>) -> Addiction {
        Addiction::new(NewAddiction {
            name: Some(name.into()),
            category: "other".into(),
            emoji: Some("🍺".into()),
            losses: Losses {
                money,
                ..Default::default()
            },
            start_date: now - Duration::days(days),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn summary_lists_each_addiction() {
        let now = Utc::now();
        let list = vec![
            addiction("Beer", 15, Some(200.0), now),
            addiction("Betting", 3, None, now),
        ];
        let text = summarize(&list, Currency::Eur, now);
        assert_eq!(
            text,
            "- Beer 🍺: 15 days clean, saved € 100.00\n- Betting 🍺: 3 days clean, saved € 0.00"
        );
    }

    #[test]
    fn empty_summary_has_placeholder() {
        assert_eq!(summarize(&[], Currency::Brl, Utc::now()), NO_ADDICTIONS);
    }

    #[test]
    fn greeting_totals_days() {
        let now = Utc::now();
        let list = vec![addiction("A", 4, None, now), addiction("B", 6, None, now)];
        assert!(greeting(&list, now).contains("10 days"));
        assert!(greeting(&[], now).contains("How are you feeling today"));
    }
}
