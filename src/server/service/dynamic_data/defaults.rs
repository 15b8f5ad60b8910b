//! Seed catalog for the reference data lists used by the intake and care forms.
//!
//! Points are listed in display order; their `sort_order` is their 1-based position.

pub struct DefaultDataType {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    /// `(name, description)` pairs.
    pub points: &'static [(&'static str, &'static str)],
}

pub const DEFAULT_DATA_TYPES: &[DefaultDataType] = &[
    DefaultDataType {
        name: "disability_types",
        display_name: "Disability Types",
        description: "Types of disabilities supported by NDIS",
        points: &[
            ("intellectual", "Intellectual Disability"),
            ("physical", "Physical Disability"),
            ("sensory", "Sensory Disability"),
            ("autism", "Autism Spectrum Disorder"),
            ("psychosocial", "Psychosocial Disability"),
            ("neurological", "Neurological Disability"),
        ],
    },
    DefaultDataType {
        name: "contact_methods",
        display_name: "Contact Methods",
        description: "Preferred contact methods for participants",
        points: &[
            ("phone", "Phone Call"),
            ("email", "Email"),
            ("sms", "SMS/Text Message"),
            ("mail", "Postal Mail"),
        ],
    },
    DefaultDataType {
        name: "plan_types",
        display_name: "Plan Types",
        description: "NDIS plan management types",
        points: &[
            ("self-managed", "Self-Managed"),
            ("plan-managed", "Plan-Managed"),
            ("agency-managed", "NDIA-Managed"),
        ],
    },
    DefaultDataType {
        name: "service_types",
        display_name: "Service Types",
        description: "Types of services offered",
        points: &[
            ("physiotherapy", "Physiotherapy"),
            ("chiro", "Chiropractic"),
            ("psychologist", "Psychology"),
            ("occupational_therapy", "Occupational Therapy"),
            ("speech_pathology", "Speech Pathology"),
            ("support_coordination", "Support Coordination"),
        ],
    },
    DefaultDataType {
        name: "support_categories",
        display_name: "Support Categories",
        description: "Categories of NDIS supports",
        points: &[
            ("core_supports", "Core Supports"),
            ("capital_supports", "Capital Supports"),
            ("capacity_building", "Capacity Building"),
        ],
    },
    DefaultDataType {
        name: "urgency_levels",
        display_name: "Urgency Levels",
        description: "Priority levels for referrals",
        points: &[
            ("low", "Low - Non-urgent"),
            ("medium", "Medium - Standard priority"),
            ("high", "High - Urgent"),
            ("critical", "Critical - Immediate attention required"),
        ],
    },
    DefaultDataType {
        name: "risk_categories",
        display_name: "Risk Categories",
        description: "Types of risks to assess",
        points: &[
            ("physical_safety", "Physical Safety"),
            ("medication", "Medication Management"),
            ("behavioral", "Behavioral Risks"),
            ("environmental", "Environmental Hazards"),
            ("social", "Social Risks"),
        ],
    },
    DefaultDataType {
        name: "goal_categories",
        display_name: "Goal Categories",
        description: "Categories for participant goals",
        points: &[
            ("independence", "Independence & Daily Living"),
            ("social", "Social & Community Participation"),
            ("employment", "Employment & Education"),
            ("health", "Health & Wellbeing"),
        ],
    },
    DefaultDataType {
        name: "risk_likelihood",
        display_name: "Risk Likelihood",
        description: "Likelihood levels for risk assessment",
        points: &[
            ("very_low", "Very Low"),
            ("low", "Low"),
            ("medium", "Medium"),
            ("high", "High"),
            ("very_high", "Very High"),
        ],
    },
    DefaultDataType {
        name: "risk_impact",
        display_name: "Risk Impact",
        description: "Impact levels for risk assessment",
        points: &[
            ("very_low", "Very Low"),
            ("low", "Low"),
            ("medium", "Medium"),
            ("high", "High"),
            ("very_high", "Very High"),
        ],
    },
    DefaultDataType {
        name: "support_frequencies",
        display_name: "Support Frequencies",
        description: "How often supports are provided",
        points: &[
            ("daily", "Daily"),
            ("weekly", "Weekly"),
            ("fortnightly", "Fortnightly"),
            ("monthly", "Monthly"),
            ("as_needed", "As Needed"),
        ],
    },
    DefaultDataType {
        name: "support_durations",
        display_name: "Support Durations",
        description: "Duration of support sessions",
        points: &[
            ("30_min", "30 minutes"),
            ("1_hour", "1 hour"),
            ("2_hours", "2 hours"),
            ("4_hours", "4 hours"),
            ("8_hours", "8 hours"),
        ],
    },
    DefaultDataType {
        name: "support_locations",
        display_name: "Support Locations",
        description: "Where supports are provided",
        points: &[
            ("home", "Participant's Home"),
            ("community", "Community Setting"),
            ("clinic", "Clinic/Office"),
            ("online", "Online/Telehealth"),
        ],
    },
    DefaultDataType {
        name: "staff_ratios",
        display_name: "Staff Ratios",
        description: "Staff to participant ratios",
        points: &[
            ("1_1", "1:1 (One-on-one)"),
            ("1_2", "1:2 (One to two)"),
            ("1_3", "1:3 (One to three)"),
            ("1_4", "1:4 (One to four)"),
            ("group", "Group Setting"),
        ],
    },
];
