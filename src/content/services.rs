//! Service catalog

use crate::state::SelectorItem;

/// Where a service can be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Virtual,
    InPerson,
    Both,
}

impl ServiceKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Virtual => "Virtual",
            Self::InPerson => "In-Person",
            Self::Both => "Virtual & In-Person",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub pricing: Option<&'static str>,
    pub duration: Option<&'static str>,
    pub kind: ServiceKind,
}

impl SelectorItem for Service {
    fn id(&self) -> &str {
        self.id
    }

    fn tags(&self) -> &[&'static str] {
        &[]
    }
}

static SERVICES: &[Service] = &[
    Service {
        id: "personal-consultation",
        title: "Personal Consultations",
        description: "In-depth one-on-one sessions with our experienced practitioners to assess \
                      your unique biofield and create personalized healing remedies.",
        benefits: &[
            "Comprehensive biofield analysis",
            "Personalized remedy creation",
            "Face-to-face interaction with practitioners",
            "Immediate feedback and adjustments",
            "Detailed healing protocol development",
        ],
        pricing: Some("Starting from PKR 5,000"),
        duration: Some("60-90 minutes"),
        kind: ServiceKind::InPerson,
    },
    Service {
        id: "virtual-consultation",
        title: "Virtual Consultations",
        description: "Global accessibility to our healing expertise through secure video \
                      consultations, making natural healing available worldwide.",
        benefits: &[
            "Accessible from anywhere worldwide",
            "Remote biofield assessment techniques",
            "Digital remedy guidance",
            "Flexible scheduling across time zones",
            "Follow-up support via video calls",
        ],
        pricing: Some("Starting from PKR 4,000"),
        duration: Some("45-60 minutes"),
        kind: ServiceKind::Virtual,
    },
    Service {
        id: "ocean-rose-treatment",
        title: "Ocean Rose Treatment",
        description: "Specialized treatment for chronic skin allergies using our unique Ocean \
                      Rose remedy with targeted frequency imprinting.",
        benefits: &[
            "Specifically designed for skin conditions",
            "Natural allergy pattern interruption",
            "Energetic frequency optimization",
            "Long-lasting relief potential",
            "No chemical side effects",
        ],
        pricing: Some("PKR 7,500 - PKR 12,000"),
        duration: Some("2-3 sessions"),
        kind: ServiceKind::Both,
    },
    Service {
        id: "custom-remedy",
        title: "Custom Remedy Creation",
        description: "Bespoke remedy development based on your individual biofield signature \
                      and specific health concerns.",
        benefits: &[
            "Completely personalized formulation",
            "Multiple condition targeting",
            "Ongoing remedy adjustments",
            "Detailed application instructions",
            "Progress monitoring and optimization",
        ],
        pricing: Some("PKR 6,000 - PKR 10,000"),
        duration: Some("Variable"),
        kind: ServiceKind::Both,
    },
];

pub fn services() -> Vec<Service> {
    SERVICES.to_vec()
}
