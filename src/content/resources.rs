//! Educational resources, grouped by tab

use crate::state::{Category, SelectorItem};

pub const BIOGEOMETRY_TAB: Category = Category::Named("biogeometry");
pub const ARTICLES_TAB: Category = Category::Named("articles");
pub const FAQ_TAB: Category = Category::Named("faq");

/// Tabs in display order
pub const RESOURCE_TABS: [Category; 3] = [BIOGEOMETRY_TAB, ARTICLES_TAB, FAQ_TAB];

/// Display name for a resource tab
pub fn tab_title(tab: Category) -> &'static str {
    match tab.label() {
        "biogeometry" => "BioGeometry",
        "articles" => "Articles",
        "faq" => "FAQ",
        _ => "All",
    }
}

/// What kind of resource an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Article, podcast or video about BioGeometry
    Feature {
        format: &'static str,
        duration: &'static str,
    },
    Article {
        category: &'static str,
        read_time: &'static str,
    },
    /// Question in `title`, answer in `body`
    Faq,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub id: &'static str,
    /// Tab id this entry is listed under
    pub tab: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub kind: ResourceKind,
}

impl SelectorItem for ResourceEntry {
    fn id(&self) -> &str {
        self.id
    }

    fn tags(&self) -> &[&'static str] {
        std::slice::from_ref(&self.tab)
    }
}

static RESOURCES: &[ResourceEntry] = &[
    ResourceEntry {
        id: "bg-ibrahim-karim",
        tab: "biogeometry",
        title: "Dr. Ibrahim Karim - Founder of BioGeometry",
        body: "Learn about the pioneering work of Dr. Ibrahim Karim, who coined the term \
               \"BioGeometry\" and developed this revolutionary approach to energy science.",
        kind: ResourceKind::Feature {
            format: "article",
            duration: "5 min read",
        },
    },
    ResourceEntry {
        id: "bg-doreya-karim",
        tab: "biogeometry",
        title: "Doreya Karim - Director of BioGeometry Energy Systems",
        body: "Discover insights from Doreya Karim, daughter of Dr. Ibrahim Karim, who currently \
               leads BioGeometry Energy Systems Ltd. in Canada.",
        kind: ResourceKind::Feature {
            format: "podcast",
            duration: "25 min listen",
        },
    },
    ResourceEntry {
        id: "bg-principles",
        tab: "biogeometry",
        title: "BioGeometry Principles in Modern Healing",
        body: "Understanding how BioGeometry principles are applied in resonance healing and \
               natural medicine practices.",
        kind: ResourceKind::Feature {
            format: "video",
            duration: "12 min watch",
        },
    },
    ResourceEntry {
        id: "article-water-memory",
        tab: "articles",
        title: "The Science of Water Memory in Healing",
        body: "Exploring how water retains energetic information and its applications in natural \
               medicine.",
        kind: ResourceKind::Article {
            category: "Science",
            read_time: "8 min read",
        },
    },
    ResourceEntry {
        id: "article-biofield-assessment",
        tab: "articles",
        title: "Biofield Assessment: Understanding Your Energy Signature",
        body: "Learn about the comprehensive process of biofield analysis and what it reveals \
               about your health.",
        kind: ResourceKind::Article {
            category: "Assessment",
            read_time: "6 min read",
        },
    },
    ResourceEntry {
        id: "article-ocean-rose",
        tab: "articles",
        title: "Ocean Rose Treatment: A Revolutionary Approach to Skin Allergies",
        body: "Detailed overview of our specialized treatment for chronic skin conditions and \
               allergic reactions.",
        kind: ResourceKind::Article {
            category: "Treatment",
            read_time: "10 min read",
        },
    },
    ResourceEntry {
        id: "article-natural-vs-conventional",
        tab: "articles",
        title: "Natural Healing vs. Conventional Medicine: A Balanced Perspective",
        body: "Understanding the benefits and applications of natural healing methods in modern \
               healthcare.",
        kind: ResourceKind::Article {
            category: "Philosophy",
            read_time: "12 min read",
        },
    },
    ResourceEntry {
        id: "faq-what-is",
        tab: "faq",
        title: "What is resonance healing and how does it work?",
        body: "Resonance healing is based on the principle that water can retain and transmit \
               energetic information. We collect spring water with natural healing properties, \
               assess your unique biofield, and imprint specific frequencies onto the water to \
               create personalized remedies that help restore your energetic balance.",
        kind: ResourceKind::Faq,
    },
    ResourceEntry {
        id: "faq-safety",
        tab: "faq",
        title: "Is resonance healing safe? Are there any side effects?",
        body: "Yes, resonance healing is completely safe as it uses only natural spring water and \
               energy imprinting. There are no chemicals or invasive procedures involved, and \
               therefore no harmful side effects. The remedies work with your body's natural \
               healing processes.",
        kind: ResourceKind::Faq,
    },
    ResourceEntry {
        id: "faq-results",
        tab: "faq",
        title: "How long does it take to see results?",
        body: "Results can vary depending on the individual and condition being treated. Some \
               clients notice improvements within days, while others may take several weeks. We \
               provide ongoing support and can adjust remedies based on your progress.",
        kind: ResourceKind::Faq,
    },
    ResourceEntry {
        id: "faq-virtual",
        tab: "faq",
        title: "Can virtual consultations be as effective as in-person visits?",
        body: "Yes, our virtual consultations are highly effective. We use specialized techniques \
               for remote biofield assessment and can guide you through the entire process \
               online. Many of our international clients achieve excellent results through \
               virtual sessions.",
        kind: ResourceKind::Faq,
    },
    ResourceEntry {
        id: "faq-conditions",
        tab: "faq",
        title: "What conditions can be treated with resonance healing?",
        body: "We can address a wide range of conditions including chronic skin allergies, \
               digestive issues, energy imbalances, stress-related conditions, and many other \
               health concerns. Our Ocean Rose treatment is particularly effective for skin \
               conditions.",
        kind: ResourceKind::Faq,
    },
    ResourceEntry {
        id: "faq-cost",
        tab: "faq",
        title: "How much do consultations and treatments cost?",
        body: "Consultation fees range from PKR 4,000-5,000 for virtual/in-person sessions. \
               Specialized treatments like Ocean Rose range from PKR 7,500-12,000. Custom \
               remedies are PKR 6,000-10,000. Exact pricing depends on your specific needs.",
        kind: ResourceKind::Faq,
    },
];

pub fn resources() -> Vec<ResourceEntry> {
    RESOURCES.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_sits_in_a_known_tab() {
        for entry in resources() {
            assert!(
                RESOURCE_TABS.iter().any(|t| t.label() == entry.tab),
                "{} has unknown tab {}",
                entry.id,
                entry.tab
            );
        }
    }

    #[test]
    fn test_entry_tags_are_its_tab() {
        let entry = &resources()[0];
        assert_eq!(entry.tags(), &["biogeometry"]);
    }

    #[test]
    fn test_tab_titles() {
        assert_eq!(tab_title(BIOGEOMETRY_TAB), "BioGeometry");
        assert_eq!(tab_title(ARTICLES_TAB), "Articles");
        assert_eq!(tab_title(FAQ_TAB), "FAQ");
        assert_eq!(tab_title(Category::All), "All");
    }

    #[test]
    fn test_faq_count() {
        let faqs = resources()
            .into_iter()
            .filter(|e| e.kind == ResourceKind::Faq)
            .count();
        assert_eq!(faqs, 6);
    }
}
