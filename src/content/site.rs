//! Static copy for the informational sections

pub const BRAND: &str = "Resonance";
pub const TAGLINE: &str = "It Cures!";
pub const SUBTITLE: &str =
    "Natural healing through spring water remedies and biofield resonance therapy";
pub const KEY_QUOTE: &str = "Whenever the vibration within your body becomes weak, there will be \
                             an equivalent weakening of your health and your energy";
pub const SOCIAL_PROOF: &str = "Join 1000+ people who found natural healing";

pub const PHILOSOPHY_INTRO: &str = "We explore the profound healing potential of resonance \
                                    remedies prepared from spring water, tailored to each \
                                    individual's unique biofield signature.";

/// A titled paragraph, used for principles and benefits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRINCIPLES: [Highlight; 4] = [
    Highlight {
        title: "Natural Healing Approach",
        description: "We focus exclusively on natural healing methods, avoiding chemicals and \
                      invasive practices while harnessing the power of spring water and biofield \
                      resonance.",
    },
    Highlight {
        title: "Water's Energetic Memory",
        description: "Spring water possesses an innate ability to retain and transmit energetic \
                      information, serving as the foundation for our personalized healing \
                      remedies.",
    },
    Highlight {
        title: "Biofield Resonance Therapy",
        description: "Our therapy works by optimizing your unique biofield signature, restoring \
                      energetic balance and enhancing your natural healing capabilities.",
    },
    Highlight {
        title: "Holistic Wellness",
        description: "We address root causes rather than just symptoms, providing comprehensive \
                      healing that supports your overall well-being and vitality.",
    },
];

pub const BENEFITS: [Highlight; 3] = [
    Highlight {
        title: "No Chemical Dependencies",
        description: "Pure spring water-based remedies without synthetic chemicals or harmful \
                      side effects",
    },
    Highlight {
        title: "Personalized Treatment",
        description: "Individual biofield assessment ensures completely customized healing \
                      solutions",
    },
    Highlight {
        title: "Global Accessibility",
        description: "Virtual consultations make our expertise available to clients worldwide",
    },
];

/// Headline figures shown under the testimonials
pub const STATISTICS: [(&str, &str); 3] = [
    ("1000+", "Clients Healed"),
    ("4.9", "Average Rating"),
    ("98%", "Success Rate"),
];

/// One way of reaching the practice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub content: &'static str,
    pub note: &'static str,
}

pub const PHONE: ContactChannel = ContactChannel {
    title: "Phone",
    content: "+92 XXX XXX XXXX",
    note: "Quick response guaranteed",
};

pub const EMAIL: ContactChannel = ContactChannel {
    title: "Email",
    content: "info@resonancehealing.com",
    note: "We respond within 24 hours",
};

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    PHONE,
    EMAIL,
    ContactChannel {
        title: "Location",
        content: "Pakistan",
        note: "Serving clients worldwide",
    },
    ContactChannel {
        title: "Business Hours",
        content: "Mon - Fri: 9:00 AM - 6:00 PM",
        note: "Emergency consultations available",
    },
];

/// Bookable appointment start times
pub const TIME_SLOTS: [&str; 7] = ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"];

pub const BOOKING_CONFIRMATION: &str = "Thank you for your interest in Resonance Healing. Hamza \
                                        will contact you within 24 hours to confirm your \
                                        appointment details.";
pub const CONTACT_CONFIRMATION: &str =
    "Thank you for contacting us. We'll respond within 24 hours.";
