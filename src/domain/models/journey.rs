#[cfg(test)]
#[path = "journey_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use once_cell::sync::Lazy;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

static CATALOG: Lazy<Vec<Journey>> = Lazy::new(|| {
    return vec![
        Journey {
            name: JourneyName::Productivity,
            title: "Productivity Assistant",
            icon: "📝",
            description: "Help you manage tasks, schedule meetings, and boost your productivity",
            welcome_message: "Hi there! I'm your Productivity Assistant. How can I help you today?",
            steps: &[
                "Introduction",
                "Task Analysis",
                "Prioritization",
                "Scheduling",
                "Review",
            ],
        },
        Journey {
            name: JourneyName::Learning,
            title: "Learning Companion",
            icon: "🧠",
            description: "Guide you through learning new skills with personalized content",
            welcome_message: "Hello! I'm your Learning Companion. What would you like to learn today?",
            steps: &[
                "Topic Selection",
                "Skill Assessment",
                "Learning Plan",
                "Practice",
                "Mastery",
            ],
        },
        Journey {
            name: JourneyName::Wellness,
            title: "Wellness Coach",
            icon: "🧘",
            description: "Support your mental and physical wellbeing with tailored advice",
            welcome_message: "Welcome! I'm your Wellness Coach. How are you feeling today?",
            steps: &[
                "Check-in",
                "Goal Setting",
                "Daily Plan",
                "Reflection",
                "Progress",
            ],
        },
        Journey {
            name: JourneyName::Creative,
            title: "Creative Partner",
            icon: "💡",
            description: "Spark your creativity and help you brainstorm new ideas",
            welcome_message: "Hey there! I'm your Creative Partner. Let's spark some ideas together!",
            steps: &[
                "Inspiration",
                "Ideation",
                "Development",
                "Refinement",
                "Completion",
            ],
        },
    ];
});

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    EnumIter,
    EnumVariantNames,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
pub enum JourneyName {
    Productivity,
    Learning,
    Wellness,
    Creative,
}

impl JourneyName {
    pub fn parse(text: &str) -> Result<JourneyName> {
        let lower = text.trim().to_lowercase();
        for name in JourneyName::iter() {
            if name.to_string() == lower {
                return Ok(name);
            }
        }

        bail!(format!("No journey found for {text}"))
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Journey {
    pub name: JourneyName,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub welcome_message: &'static str,
    pub steps: &'static [&'static str],
}

pub struct JourneyCatalog {}

impl JourneyCatalog {
    pub fn all() -> &'static [Journey] {
        return &CATALOG;
    }

    pub fn get(name: JourneyName) -> &'static Journey {
        return CATALOG
            .iter()
            .find(|journey| {
                return journey.name == name;
            })
            .unwrap();
    }
}

/// A roll strictly above this advances the journey one step.
pub const STEP_ADVANCE_THRESHOLD: f64 = 0.7;

#[derive(Clone, Debug)]
pub struct JourneyProgress {
    steps: Vec<String>,
    current: usize,
}

impl JourneyProgress {
    pub fn new(journey: &Journey) -> JourneyProgress {
        return JourneyProgress {
            steps: journey
                .steps
                .iter()
                .map(|step| {
                    return step.to_string();
                })
                .collect(),
            current: 0,
        };
    }

    pub fn current_step(&self) -> usize {
        return self.current;
    }

    pub fn total_steps(&self) -> usize {
        return self.steps.len();
    }

    pub fn step_label(&self) -> &str {
        return &self.steps[self.current];
    }

    /// Advancement is random per assistant reply. The roll is injected so
    /// callers own the randomness source.
    pub fn maybe_advance(&mut self, roll: f64) -> bool {
        if roll > STEP_ADVANCE_THRESHOLD && self.current < self.steps.len() - 1 {
            self.current += 1;
            return true;
        }

        return false;
    }
}
