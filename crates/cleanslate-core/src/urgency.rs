//! Crisis-support copy for the "urgency" button.
//!
//! The text is picked by keyword from the addiction's name and category, so
//! records named in Portuguese or English both land on the right topic.
//! Anything unmatched gets the general grounding steps.

use indoc::indoc;
use serde::Serialize;

use crate::addiction::Addiction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTopic {
    Pornography,
    Food,
    Alcohol,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrgencyContent {
    pub topic: UrgencyTopic,
    pub title: &'static str,
    pub content: &'static str,
}

// Checked in order; the first topic with a matching keyword wins.
const KEYWORDS: [(UrgencyTopic, &[&str]); 3] = [
    (UrgencyTopic::Pornography, &["pornografia", "pornô", "porn"]),
    (
        UrgencyTopic::Food,
        &["comida", "alimentação", "comer", "food", "eating", "binge"],
    ),
    (
        UrgencyTopic::Alcohol,
        &["álcool", "alcool", "bebida", "alcohol", "drinking", "drink"],
    ),
];

const PORNOGRAPHY: &str = indoc! {"
    You are about to step into a vast and sometimes risky online space. To help keep your digital path safe and healthy, take stock of where you are heading before you open anything.

    Close the tabs you do not need, put the device in another room if you can, and reflect on the choice you want to be proud of tomorrow.

    Let's start your journey towards a healthier digital life!
"};

const FOOD: &str = indoc! {"
    1. Meal log: what have you eaten today? Writing it down helps you see the pattern behind the urge.

    2. Physical activity: what have you done today? Even a short walk counts.

    3. Hydration: how many glasses of water have you had? Thirst is easy to mistake for hunger.

    4. Health goals: what do you want to achieve? Check your progress and adjust your goals when needed.

    Let's change these habits together!
"};

const ALCOHOL: &str = indoc! {"
    How are you feeling today?

    Daily reflection: name your emotions and thoughts. What was hard today? What made you feel grateful?

    Skills and strategies: which techniques helped you through today's challenges? Lean on them now.

    Personal goals: what are your goals for the next few days? Write them down and remember you are not alone on this journey.

    Remember: every day is a new opportunity!
"};

const GENERAL: &str = indoc! {"
    You are going through a hard moment, but you are strong!

    Take a deep breath and remember:
    • You have already come this far
    • Every moment of resistance is a victory
    • You are not alone on this journey
    • Tomorrow you will be glad you held on today

    What you can do right now:
    1. Breathe deeply for 5 minutes
    2. Drink a glass of water
    3. Take a quick walk
    4. Call someone you trust
    5. Write down what you are feeling

    You can do this! 💪
"};

impl UrgencyTopic {
    /// Topic for a free-text label such as an addiction name.
    pub fn detect(label: &str) -> Self {
        let label = label.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| label.contains(w)))
            .map(|(topic, _)| *topic)
            .unwrap_or(UrgencyTopic::General)
    }

    pub fn content(self) -> UrgencyContent {
        let (title, content) = match self {
            UrgencyTopic::Pornography => ("Protecting Your Digital Path", PORNOGRAPHY),
            UrgencyTopic::Food => ("Ready to look after your health today?", FOOD),
            UrgencyTopic::Alcohol => ("Welcome to the Path of Sobriety!", ALCOHOL),
            UrgencyTopic::General => ("Urgent Moment", GENERAL),
        };
        UrgencyContent {
            topic: self,
            title,
            content,
        }
    }
}

/// Support copy for `addiction`, matched on its name first, then its category.
pub fn content_for(addiction: &Addiction) -> UrgencyContent {
    let by_name = UrgencyTopic::detect(&addiction.name);
    let topic = match by_name {
        UrgencyTopic::General => UrgencyTopic::detect(&addiction.category),
        found => found,
    };
    topic.content()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addiction::NewAddiction;
    use chrono::{TimeZone, Utc};

    fn named(name: &str, category: &str) -> Addiction {
        Addiction::new(NewAddiction {
            name: Some(name.into()),
            category: category.into(),
            start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn pornography_keywords() {
        assert_eq!(UrgencyTopic::detect("Pornografia"), UrgencyTopic::Pornography);
        assert_eq!(UrgencyTopic::detect("pornô online"), UrgencyTopic::Pornography);
        assert_eq!(UrgencyTopic::detect("Porn"), UrgencyTopic::Pornography);
    }

    #[test]
    fn food_keywords() {
        assert_eq!(UrgencyTopic::detect("Comida"), UrgencyTopic::Food);
        assert_eq!(UrgencyTopic::detect("ALIMENTAÇÃO"), UrgencyTopic::Food);
        assert_eq!(UrgencyTopic::detect("comer à noite"), UrgencyTopic::Food);
        assert_eq!(UrgencyTopic::detect("Binge eating"), UrgencyTopic::Food);
    }

    #[test]
    fn alcohol_keywords() {
        assert_eq!(UrgencyTopic::detect("Álcool"), UrgencyTopic::Alcohol);
        assert_eq!(UrgencyTopic::detect("alcool"), UrgencyTopic::Alcohol);
        assert_eq!(UrgencyTopic::detect("Bebida"), UrgencyTopic::Alcohol);
        assert_eq!(UrgencyTopic::detect("Weekend drinking"), UrgencyTopic::Alcohol);
    }

    #[test]
    fn earlier_topic_wins_when_several_match() {
        assert_eq!(UrgencyTopic::detect("comida e bebida"), UrgencyTopic::Food);
    }

    #[test]
    fn unmatched_gets_general_steps() {
        let content = content_for(&named("Smoking", "tobacco"));
        assert_eq!(content.topic, UrgencyTopic::General);
        assert_eq!(content.title, "Urgent Moment");
        assert!(content.content.contains("1. Breathe deeply for 5 minutes"));
        assert!(content.content.contains("5. Write down what you are feeling"));
    }

    #[test]
    fn category_is_used_when_name_is_neutral() {
        let content = content_for(&named("Friday nights", "bebida"));
        assert_eq!(content.topic, UrgencyTopic::Alcohol);
        assert_eq!(content.title, "Welcome to the Path of Sobriety!");
    }

    #[test]
    fn name_takes_precedence_over_category() {
        let content = content_for(&named("Comida", "alcohol"));
        assert_eq!(content.topic, UrgencyTopic::Food);
    }
}
