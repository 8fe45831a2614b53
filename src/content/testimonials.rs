//! Client testimonials

use crate::state::{Category, SelectorItem};
use chrono::NaiveDate;

/// Condition keywords offered as testimonial filters
pub const CONDITION_FILTERS: [&str; 5] = ["skin", "energy", "allergy", "stress", "digestive"];

/// A client success story
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    /// Condition as the client described it
    pub condition: &'static str,
    /// Filter keywords for the condition
    pub keywords: &'static [&'static str],
    /// Star rating out of 5
    pub rating: u8,
    pub text: &'static str,
    /// ISO date (`YYYY-MM-DD`)
    pub date: &'static str,
}

impl Testimonial {
    /// "January 2024" style label, or the raw date if it does not parse
    pub fn month_label(&self) -> String {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d")
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|_| self.date.to_string())
    }

    /// Rating clamped to the 0-5 star scale
    pub fn stars(&self) -> u8 {
        self.rating.min(5)
    }
}

impl SelectorItem for Testimonial {
    fn id(&self) -> &str {
        self.id
    }

    fn tags(&self) -> &[&'static str] {
        self.keywords
    }
}

/// Filter button label for a testimonial category
pub fn filter_label(category: Category) -> String {
    match category {
        Category::All => "All Stories".to_string(),
        Category::Named(label) => {
            let mut chars = label.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "1",
        name: "Sarah Ahmed",
        location: "Karachi, Pakistan",
        condition: "Chronic Eczema",
        keywords: &["skin", "eczema"],
        rating: 5,
        text: "After years of struggling with severe eczema and trying countless treatments, \
               the Ocean Rose treatment completely transformed my skin. Within 3 months, my skin \
               cleared up remarkably, and I finally feel confident again.",
        date: "2024-01-15",
    },
    Testimonial {
        id: "2",
        name: "Michael Chen",
        location: "Toronto, Canada",
        condition: "Energy Imbalance",
        keywords: &["energy"],
        rating: 5,
        text: "The virtual consultation was incredibly thorough. The personalized remedy helped \
               restore my energy levels and overall wellbeing. I appreciate the natural approach \
               and the ongoing support from the team.",
        date: "2024-02-03",
    },
    Testimonial {
        id: "3",
        name: "Fatima Khan",
        location: "Lahore, Pakistan",
        condition: "Allergic Reactions",
        keywords: &["allergy", "allergic"],
        rating: 4,
        text: "I was skeptical about resonance healing at first, but the results speak for \
               themselves. My chronic allergic reactions have significantly reduced, and I feel \
               more balanced than ever before.",
        date: "2024-01-28",
    },
    Testimonial {
        id: "4",
        name: "David Wilson",
        location: "London, UK",
        condition: "Stress and Anxiety",
        keywords: &["stress", "anxiety"],
        rating: 5,
        text: "The biofield assessment revealed imbalances I never knew existed. The custom \
               remedy has helped me manage stress naturally, and I sleep better than I have in \
               years. Highly recommend their approach.",
        date: "2024-02-12",
    },
    Testimonial {
        id: "5",
        name: "Ayesha Rahman",
        location: "Dubai, UAE",
        condition: "Digestive Issues",
        keywords: &["digestive"],
        rating: 5,
        text: "Working with Resonance Healing changed my perspective on natural medicine. The \
               spring water remedies addressed my digestive issues from the root cause, not just \
               the symptoms.",
        date: "2024-01-10",
    },
];

pub fn testimonials() -> Vec<Testimonial> {
    TESTIMONIALS.to_vec()
}
