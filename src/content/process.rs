//! The five-step treatment process

use crate::state::SelectorItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreatmentStep {
    pub id: &'static str,
    /// 1-based position in the process
    pub number: u8,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub icon: &'static str,
}

impl SelectorItem for TreatmentStep {
    fn id(&self) -> &str {
        self.id
    }

    fn tags(&self) -> &[&'static str] {
        &[]
    }
}

static STEPS: &[TreatmentStep] = &[
    TreatmentStep {
        id: "spring-water-collection",
        number: 1,
        title: "Spring Water Collection",
        summary: "Pristine spring water with energetic qualities",
        details: "We carefully collect spring water from pristine sources known for their natural \
                  healing properties and energetic qualities. This water serves as the foundation \
                  for all our remedies.",
        icon: "≈",
    },
    TreatmentStep {
        id: "biofield-analysis",
        number: 2,
        title: "Biofield Analysis",
        summary: "Unique energetic profile assessment",
        details: "Our practitioners conduct a comprehensive assessment of your individual biofield \
                  using advanced techniques to understand your unique energetic signature and \
                  imbalances.",
        icon: "◎",
    },
    TreatmentStep {
        id: "frequency-imprinting",
        number: 3,
        title: "Frequency Imprinting",
        summary: "Specific patterns imprinted onto water",
        details: "Based on your biofield analysis, we imprint specific frequencies and information \
                  patterns onto the spring water, creating a personalized healing matrix tailored \
                  to your needs.",
        icon: "∿",
    },
    TreatmentStep {
        id: "remedy-preparation",
        number: 4,
        title: "Remedy Preparation",
        summary: "Potentized solution creation",
        details: "The imprinted spring water is carefully diluted and potentized to create your \
                  personalized remedy, following precise protocols to maintain the energetic \
                  integrity of the solution.",
        icon: "△",
    },
    TreatmentStep {
        id: "healing-application",
        number: 5,
        title: "Healing Application",
        summary: "Guided treatment by practitioners",
        details: "Our qualified practitioners guide you through the proper application of your \
                  remedy, providing personalized dosage instructions and ongoing support \
                  throughout your healing journey.",
        icon: "♥",
    },
];

pub fn treatment_steps() -> Vec<TreatmentStep> {
    STEPS.to_vec()
}
