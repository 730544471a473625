//! Step sequences for each wizard variant.
//!
//! A [`StepSequence`] is an ordered list of [`StepDescriptor`]s. Each
//! descriptor names the step's concern (which decides its gate), a title, and
//! the form items a UI should render for it.

use aw_protocol::{Channel, Feature, Field, StepKind, WizardVariant};

/// One renderable form item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepItem {
    Field(Field),
    Feature(Feature),
    Channel(Channel),
}

/// Static definition of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub kind: StepKind,
    pub title: &'static str,
    /// Items always shown on this step.
    pub items: &'static [StepItem],
    /// Items shown only while the advanced panel is open.
    pub advanced_items: &'static [StepItem],
}

impl StepDescriptor {
    /// Items visible with the advanced panel open or closed.
    pub fn visible_items(&self, show_advanced: bool) -> Vec<StepItem> {
        let mut items = self.items.to_vec();
        if show_advanced {
            items.extend_from_slice(self.advanced_items);
        }
        items
    }
}

const CORE_FEATURES: &[StepItem] = &[
    StepItem::Feature(Feature::AutoResponse),
    StepItem::Feature(Feature::KnowledgeBase),
    StepItem::Feature(Feature::HumanHandoff),
    StepItem::Feature(Feature::Analytics),
];

const ADVANCED_SETTINGS: &[StepItem] = &[
    StepItem::Field(Field::Creativity),
    StepItem::Field(Field::MaxTokens),
    StepItem::Field(Field::WorkingHours),
    StepItem::Field(Field::Timezone),
    StepItem::Feature(Feature::VoiceMail),
    StepItem::Feature(Feature::Escalation),
];

const SETTINGS_ITEMS: &[StepItem] = &[
    StepItem::Channel(Channel::VoiceCalls),
    StepItem::Channel(Channel::Email),
    StepItem::Channel(Channel::Sms),
    StepItem::Feature(Feature::AutoResponse),
    StepItem::Feature(Feature::KnowledgeBase),
    StepItem::Feature(Feature::HumanHandoff),
    StepItem::Feature(Feature::Analytics),
];

const TEMPLATE_INTRO: StepDescriptor = StepDescriptor {
    kind: StepKind::TemplateIntro,
    title: "Choose Template",
    items: &[],
    advanced_items: &[],
};

const CLASSIC_STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        kind: StepKind::BusinessInfo,
        title: "Business Info",
        items: &[
            StepItem::Field(Field::BusinessName),
            StepItem::Field(Field::Website),
            StepItem::Field(Field::BusinessDescription),
            StepItem::Field(Field::Industry),
        ],
        advanced_items: &[],
    },
    StepDescriptor {
        kind: StepKind::AgentType,
        title: "Agent Type",
        items: &[StepItem::Field(Field::AgentType)],
        advanced_items: &[],
    },
    StepDescriptor {
        kind: StepKind::VoicePersona,
        title: "Voice & Personality",
        items: &[
            StepItem::Field(Field::AgentName),
            StepItem::Field(Field::Personality),
            StepItem::Field(Field::Greeting),
            StepItem::Field(Field::VoiceGender),
            StepItem::Field(Field::Voice),
        ],
        advanced_items: &[],
    },
    StepDescriptor {
        kind: StepKind::Features,
        title: "Settings",
        items: SETTINGS_ITEMS,
        advanced_items: ADVANCED_SETTINGS,
    },
    StepDescriptor {
        kind: StepKind::Review,
        title: "Review & Launch",
        items: &[],
        advanced_items: &[],
    },
];

const COMPACT_STEPS: &[StepDescriptor] = &[
    TEMPLATE_INTRO,
    StepDescriptor {
        kind: StepKind::BusinessInfo,
        title: "Basic Info",
        items: &[
            StepItem::Field(Field::BusinessName),
            StepItem::Field(Field::BusinessDescription),
            StepItem::Field(Field::Industry),
            StepItem::Field(Field::Website),
        ],
        advanced_items: &[],
    },
    StepDescriptor {
        kind: StepKind::AgentConfiguration,
        title: "Configuration",
        items: &[
            StepItem::Field(Field::AgentType),
            StepItem::Field(Field::AgentName),
            StepItem::Field(Field::Personality),
            StepItem::Field(Field::Greeting),
            StepItem::Field(Field::VoiceGender),
            StepItem::Field(Field::Voice),
            StepItem::Feature(Feature::AutoResponse),
            StepItem::Feature(Feature::KnowledgeBase),
            StepItem::Feature(Feature::HumanHandoff),
            StepItem::Feature(Feature::Analytics),
        ],
        advanced_items: ADVANCED_SETTINGS,
    },
    StepDescriptor {
        kind: StepKind::Review,
        title: "Review & Deploy",
        items: &[],
        advanced_items: &[],
    },
];

const ENHANCED_STEPS: &[StepDescriptor] = &[
    TEMPLATE_INTRO,
    StepDescriptor {
        kind: StepKind::BusinessInfo,
        title: "Business Information",
        items: &[
            StepItem::Field(Field::BusinessName),
            StepItem::Field(Field::Industry),
            StepItem::Field(Field::BusinessDescription),
            StepItem::Field(Field::Website),
        ],
        advanced_items: &[],
    },
    StepDescriptor {
        kind: StepKind::AgentType,
        title: "Agent Setup",
        items: &[
            StepItem::Field(Field::AgentType),
            StepItem::Field(Field::AgentName),
            StepItem::Field(Field::Greeting),
            StepItem::Field(Field::Personality),
            StepItem::Field(Field::PhoneNumber),
        ],
        advanced_items: &[],
    },
    StepDescriptor {
        kind: StepKind::VoicePersona,
        title: "Voice Selection",
        items: &[
            StepItem::Field(Field::VoiceGender),
            StepItem::Field(Field::Voice),
        ],
        advanced_items: &[],
    },
    StepDescriptor {
        kind: StepKind::Features,
        title: "Features & Settings",
        items: CORE_FEATURES,
        advanced_items: ADVANCED_SETTINGS,
    },
    StepDescriptor {
        kind: StepKind::Review,
        title: "Review & Launch",
        items: &[],
        advanced_items: &[],
    },
];

/// The ordered steps of one wizard variant. Step numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSequence {
    variant: WizardVariant,
    steps: &'static [StepDescriptor],
}

impl StepSequence {
    pub fn for_variant(variant: WizardVariant) -> Self {
        let steps = match variant {
            WizardVariant::Classic => CLASSIC_STEPS,
            WizardVariant::Compact => COMPACT_STEPS,
            WizardVariant::Enhanced => ENHANCED_STEPS,
        };
        Self { variant, steps }
    }

    pub fn variant(&self) -> WizardVariant {
        self.variant
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Descriptor for 1-based `step`.
    pub fn get(&self, step: usize) -> Option<&'static StepDescriptor> {
        step.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn steps(&self) -> &'static [StepDescriptor] {
        self.steps
    }

    /// 1-based number of the first step of `kind`, if the sequence has one.
    pub fn position_of(&self, kind: StepKind) -> Option<usize> {
        self.steps.iter().position(|s| s.kind == kind).map(|i| i + 1)
    }
}
