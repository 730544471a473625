//! Wizard form controller.
//!
//! The `WizardController` owns one session's [`WizardState`], applies
//! operations to it synchronously, and reports every observable change on an
//! event channel for the UI.

use aw_protocol::config_models::{GreetingPolicy, ProfileDefaults, WizardConfig};
use aw_protocol::field_models::{Field, FieldUpdate};
use aw_protocol::ipc::{Event, Notification, NotificationKind, Op};
use aw_protocol::profile_models::{AgentProfile, Channel, Feature};
use aw_protocol::step_models::{StepCheck, StepKind, Transition, WizardVariant};
use aw_protocol::template_models::Template;
use tokio::sync::mpsc::UnboundedSender;

use crate::catalog::industries::{agent_types, AgentTypeOption};
use crate::catalog::templates::TemplateCatalog;
use crate::catalog::voices::DEFAULT_VOICE_ID;
use crate::derive::{
    agent_type_set_for, greeting_for, initial_agent_type, voice_after_gender_change,
};
use crate::wizard::state::{ChooserState, WizardState};
use crate::wizard::steps::{StepDescriptor, StepSequence};
use crate::wizard::summary::ProfileSummary;

/// Industry preselected by the enhanced variant.
const ENHANCED_DEFAULT_INDUSTRY: &str = "1";

/// Agent name the classic variant starts with. The others keep the profile default.
const CLASSIC_DEFAULT_AGENT_NAME: &str = "Alex";

/// Session settings fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct WizardOptions {
    pub variant: WizardVariant,
    pub greeting_policy: GreetingPolicy,
    pub defaults: ProfileDefaults,
    /// Template that seeds the profile before the first step is shown.
    pub initial_template: Option<Template>,
}

impl From<&WizardConfig> for WizardOptions {
    fn from(config: &WizardConfig) -> Self {
        Self {
            variant: config.variant,
            greeting_policy: config.greeting_policy,
            defaults: config.defaults.clone(),
            initial_template: None,
        }
    }
}

/// Drives one wizard session.
///
/// No operation returns an error. Refusals come back as [`Transition`] values
/// or `bool`s and are also announced as events.
pub struct WizardController {
    state: WizardState,
    sequence: StepSequence,
    catalog: TemplateCatalog,
    greeting_policy: GreetingPolicy,
    events_tx: UnboundedSender<Event>,
}

impl WizardController {
    /// Create a controller positioned at step 1.
    ///
    /// # Arguments
    ///
    /// * `options` - Variant, greeting policy, defaults and optional seed template
    /// * `catalog` - Templates offered by the chooser
    /// * `events_tx` - Channel for sending events to the UI
    pub fn new(
        options: WizardOptions,
        catalog: TemplateCatalog,
        events_tx: UnboundedSender<Event>,
    ) -> Self {
        let profile = initial_profile(options.variant, &options.defaults);

        let mut controller = Self {
            state: WizardState::new(profile),
            sequence: StepSequence::for_variant(options.variant),
            catalog,
            greeting_policy: options.greeting_policy,
            events_tx,
        };

        if let Some(template) = options.initial_template {
            seed_from_template(&mut controller.state.profile, &template);
            controller.state.selected_template = Some(template);
        }

        if controller.state.profile.business.industry.is_some() {
            controller.refresh_agent_types();
        }
        controller.refresh_greeting();

        tracing::debug!(
            session_id = %controller.state.session_id,
            variant = options.variant.as_str(),
            steps = controller.sequence.len(),
            "wizard session created"
        );

        controller
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.state.profile
    }

    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.sequence.len()
    }

    /// Descriptor of the current step.
    pub fn current_descriptor(&self) -> &'static StepDescriptor {
        self.descriptor(self.state.current_step)
    }

    /// Whether the current step is the last one.
    pub fn is_terminal(&self) -> bool {
        self.state.current_step >= self.sequence.len()
    }

    /// Gate result for 1-based `step`. Out-of-range steps are ready.
    pub fn check_step(&self, step: usize) -> StepCheck {
        self.sequence
            .get(step)
            .map_or(StepCheck::Ready, |d| d.kind.check(&self.state.profile))
    }

    /// Whether `advance()` would move right now.
    pub fn can_advance(&self) -> bool {
        !self.state.is_choosing_template()
            && !self.is_terminal()
            && self.check_step(self.state.current_step).is_ready()
    }

    /// Agent types currently offered for the selected industry.
    pub fn agent_type_options(&self) -> &'static [AgentTypeOption] {
        agent_types(self.state.agent_type_set)
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary::from_state(&self.state)
    }

    /// Apply one operation from the UI.
    pub fn handle(&mut self, op: Op) {
        tracing::trace!(?op, "handling op");

        match op {
            Op::Advance => {
                self.advance();
            }
            Op::Retreat => {
                self.retreat();
            }
            Op::SetField { update } => self.set_field(update),
            Op::SetFeature { feature, enabled } => self.set_feature(feature, enabled),
            Op::SetChannel { channel, enabled } => self.set_channel(channel, enabled),
            Op::ToggleAdvanced => {
                self.toggle_advanced_view();
            }
            Op::OpenTemplateChooser => self.open_template_chooser(),
            Op::ChooseTemplate { template_id } => {
                self.choose_template(&template_id);
            }
            Op::CancelTemplateChooser => self.cancel_template_chooser(),
            Op::TestAgent => {
                self.test_agent();
            }
            Op::TogglePreview => {
                self.toggle_preview();
            }
            Op::PublishAgent => {
                self.publish_agent();
            }
        }
    }

    /// Move forward one step if the current step's gate passes.
    pub fn advance(&mut self) -> Transition {
        if self.state.is_choosing_template() || self.is_terminal() {
            return Transition::Blocked;
        }

        let step = self.state.current_step;
        let kind = self.descriptor(step).kind;

        match kind.check(&self.state.profile) {
            StepCheck::Ready => self.move_to(step + 1),
            StepCheck::Incomplete { missing } => {
                tracing::debug!(step, ?kind, ?missing, "advance refused");
                self.emit(Event::AdvanceRefused {
                    session_id: self.state.session_id,
                    step,
                    kind,
                    missing: missing.clone(),
                });
                Transition::Refused { missing }
            }
        }
    }

    /// Move back one step. Blocked at step 1.
    pub fn retreat(&mut self) -> Transition {
        if self.state.is_choosing_template() || self.state.current_step <= 1 {
            return Transition::Blocked;
        }
        self.move_to(self.state.current_step - 1)
    }

    /// Replace one field and re-run the derivations that depend on it.
    pub fn set_field(&mut self, update: FieldUpdate) {
        let field = update.field();
        let before = self.state.profile.clone();

        if let FieldUpdate::Greeting(text) = &update {
            self.state.greeting_customized = !text.is_empty()
                && greeting_for(
                    &self.state.profile.agent.name,
                    &self.state.profile.business.name,
                )
                .as_deref()
                    != Some(text.as_str());
        }

        update.apply_to(&mut self.state.profile);

        if self.state.profile == before {
            return;
        }
        self.field_changed(field);

        match field {
            Field::AgentName | Field::BusinessName => self.refresh_greeting(),
            Field::Industry => self.refresh_agent_types(),
            Field::VoiceGender => self.refresh_voice(),
            _ => {}
        }
    }

    /// Replace one feature flag. The other flags are untouched.
    pub fn set_feature(&mut self, feature: Feature, enabled: bool) {
        if self.state.profile.features.get(feature) == enabled {
            return;
        }
        self.state.profile.features.set(feature, enabled);
        tracing::debug!(?feature, enabled, "feature toggled");
        self.emit(Event::FeatureChanged {
            session_id: self.state.session_id,
            feature,
            enabled,
        });
    }

    /// Replace one channel toggle. The other channels are untouched.
    pub fn set_channel(&mut self, channel: Channel, enabled: bool) {
        if self.state.profile.channels.get(channel) == enabled {
            return;
        }
        self.state.profile.channels.set(channel, enabled);
        tracing::debug!(?channel, enabled, "channel toggled");
        self.emit(Event::ChannelChanged {
            session_id: self.state.session_id,
            channel,
            enabled,
        });
    }

    /// Flip the advanced settings panel. Returns the new visibility.
    pub fn toggle_advanced_view(&mut self) -> bool {
        self.state.show_advanced = !self.state.show_advanced;
        self.state.show_advanced
    }

    /// Suspend the step sequence and show the template chooser.
    pub fn open_template_chooser(&mut self) {
        if self.state.is_choosing_template() {
            return;
        }
        self.state.chooser = Some(ChooserState {
            return_to: self.state.current_step,
        });
        self.emit(Event::TemplateChooserOpened {
            session_id: self.state.session_id,
        });
    }

    /// Seed the profile from the template with `template_id`.
    ///
    /// Closes the chooser and jumps to the business step. Returns `false`
    /// and leaves everything as it was when the id is unknown.
    pub fn choose_template(&mut self, template_id: &str) -> bool {
        let Some(template) = self.catalog.get(template_id).cloned() else {
            tracing::debug!(template_id, "unknown template");
            self.emit(Event::TemplateNotFound {
                session_id: self.state.session_id,
                template_id: template_id.to_string(),
            });
            return false;
        };

        let before = self.state.profile.business.clone();
        seed_from_template(&mut self.state.profile, &template);
        if self.state.profile.business.name != before.name {
            self.field_changed(Field::BusinessName);
        }
        if self.state.profile.business.description != before.description {
            self.field_changed(Field::BusinessDescription);
        }
        if self.state.profile.business.name != before.name {
            self.refresh_greeting();
        }

        tracing::info!(template_id = %template.id, "template applied");
        self.state.selected_template = Some(template);
        self.emit(Event::TemplateApplied {
            session_id: self.state.session_id,
            template_id: template_id.to_string(),
        });

        if self.state.chooser.take().is_some() {
            self.emit(Event::TemplateChooserClosed {
                session_id: self.state.session_id,
                applied: true,
            });
        }

        let target = self
            .sequence
            .position_of(StepKind::BusinessInfo)
            .unwrap_or(1);
        if target != self.state.current_step {
            self.move_to(target);
        }
        true
    }

    /// Close the chooser without changing the profile.
    pub fn cancel_template_chooser(&mut self) {
        let Some(chooser) = self.state.chooser.take() else {
            return;
        };
        self.state.current_step = chooser.return_to;
        self.emit(Event::TemplateChooserClosed {
            session_id: self.state.session_id,
            applied: false,
        });
    }

    /// Start a test run. Only available on the review step.
    pub fn test_agent(&mut self) -> bool {
        if !self.terminal_actions_available() {
            return false;
        }
        tracing::info!(session_id = %self.state.session_id, "agent test requested");
        self.notify(NotificationKind::Testing);
        true
    }

    /// Flip preview mode. Only available on the review step.
    pub fn toggle_preview(&mut self) -> bool {
        if !self.terminal_actions_available() {
            return false;
        }
        self.state.preview_mode = !self.state.preview_mode;
        self.notify(if self.state.preview_mode {
            NotificationKind::Preview
        } else {
            NotificationKind::Editing
        });
        true
    }

    /// Publish the agent. Only available on the review step.
    pub fn publish_agent(&mut self) -> bool {
        if !self.terminal_actions_available() {
            return false;
        }
        tracing::info!(session_id = %self.state.session_id, "agent publish requested");
        self.notify(NotificationKind::Publishing);
        true
    }

    fn terminal_actions_available(&self) -> bool {
        let available = self.is_terminal() && !self.state.is_choosing_template();
        if !available {
            tracing::debug!(step = self.state.current_step, "terminal action ignored");
        }
        available
    }

    fn descriptor(&self, step: usize) -> &'static StepDescriptor {
        let steps = self.sequence.steps();
        &steps[step.clamp(1, steps.len()) - 1]
    }

    fn move_to(&mut self, to: usize) -> Transition {
        let from = self.state.current_step;
        self.state.current_step = to;
        tracing::debug!(from, to, "step changed");
        self.emit(Event::StepChanged {
            session_id: self.state.session_id,
            from,
            to,
        });
        Transition::Moved { from, to }
    }

    fn refresh_greeting(&mut self) {
        let profile = &self.state.profile;
        let Some(greeting) = greeting_for(&profile.agent.name, &profile.business.name) else {
            return;
        };

        if self.greeting_policy == GreetingPolicy::Sticky && self.state.greeting_customized {
            tracing::debug!("keeping customized greeting");
            return;
        }

        self.state.greeting_customized = false;
        if self.state.profile.agent.greeting != greeting {
            self.state.profile.agent.greeting = greeting;
            self.field_changed(Field::Greeting);
        }
    }

    fn refresh_agent_types(&mut self) {
        let set = agent_type_set_for(self.state.profile.business.industry.as_deref());
        self.state.agent_type_set = set;
        self.state.profile.agent.agent_type = Some(initial_agent_type(set).to_string());

        tracing::debug!(?set, "agent type options recomputed");
        self.emit(Event::AgentTypeOptionsChanged {
            session_id: self.state.session_id,
            set,
        });
        self.field_changed(Field::AgentType);
    }

    fn refresh_voice(&mut self) {
        let voice = &mut self.state.profile.voice;
        let kept = voice_after_gender_change(voice.gender, voice.voice_id.as_deref());
        if kept != voice.voice_id {
            voice.voice_id = kept;
            self.field_changed(Field::Voice);
        }
    }

    fn field_changed(&self, field: Field) {
        self.emit(Event::FieldChanged {
            session_id: self.state.session_id,
            field,
        });
    }

    fn notify(&self, kind: NotificationKind) {
        self.emit(Event::Notification(Notification::new(kind)));
    }

    fn emit(&self, event: Event) {
        // A dropped receiver only means nobody is listening anymore.
        let _ = self.events_tx.send(event);
    }
}

/// Fresh profile for `variant` with configured defaults applied.
fn initial_profile(variant: WizardVariant, defaults: &ProfileDefaults) -> AgentProfile {
    let mut profile = AgentProfile::default();

    match variant {
        WizardVariant::Classic => {
            profile.agent.name = CLASSIC_DEFAULT_AGENT_NAME.to_string();
        }
        WizardVariant::Enhanced => {
            profile.business.industry = Some(ENHANCED_DEFAULT_INDUSTRY.to_string());
            profile.voice.voice_id = Some(DEFAULT_VOICE_ID.to_string());
        }
        WizardVariant::Compact => {}
    }

    if let Some(name) = &defaults.agent_name {
        profile.agent.name = name.clone();
    }
    if let Some(personality) = defaults.personality {
        profile.agent.personality = personality;
    }
    if let Some(timezone) = &defaults.timezone {
        profile.advanced.timezone = timezone.clone();
    }
    if let Some(industry) = &defaults.industry {
        profile.business.industry = Some(industry.clone());
    }

    profile
}

fn seed_from_template(profile: &mut AgentProfile, template: &Template) {
    profile.business.name = template.name.clone();
    profile.business.description = template.description.clone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    fn controller(variant: WizardVariant) -> (WizardController, UnboundedReceiver<Event>) {
        let (tx, rx) = unbounded_channel();
        let options = WizardOptions {
            variant,
            ..Default::default()
        };
        let catalog = TemplateCatalog::builtin().expect("builtin templates");
        (WizardController::new(options, catalog, tx), rx)
    }

    fn drain(rx: &mut UnboundedReceiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_classic_starts_blank() {
        let (wizard, _rx) = controller(WizardVariant::Classic);
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.total_steps(), 5);
        assert_eq!(wizard.profile().business.industry, None);
        assert_eq!(wizard.profile().agent.agent_type, None);
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_enhanced_seeds_industry_and_voice() {
        let (wizard, _rx) = controller(WizardVariant::Enhanced);
        assert_eq!(wizard.profile().business.industry.as_deref(), Some("1"));
        assert_eq!(wizard.profile().voice.voice_id.as_deref(), Some("Voice 1"));
        assert_eq!(wizard.profile().agent.agent_type.as_deref(), Some("receptionist"));
    }

    #[test]
    fn test_refused_advance_emits_event() {
        let (mut wizard, mut rx) = controller(WizardVariant::Classic);

        let transition = wizard.advance();

        assert_eq!(
            transition,
            Transition::Refused {
                missing: vec![
                    Field::BusinessName,
                    Field::BusinessDescription,
                    Field::Industry
                ]
            }
        );
        assert!(drain(&mut rx)
            .iter()
            .any(|e| matches!(e, Event::AdvanceRefused { step: 1, .. })));
    }

    #[test]
    fn test_unchanged_value_emits_nothing() {
        let (mut wizard, mut rx) = controller(WizardVariant::Classic);
        drain(&mut rx);
        wizard.set_field(FieldUpdate::AgentName("Alex".to_string()));
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_gender_change_clears_unoffered_voice() {
        let (mut wizard, _rx) = controller(WizardVariant::Enhanced);
        wizard.set_field(FieldUpdate::VoiceGender(aw_protocol::VoiceGender::Male));
        wizard.set_field(FieldUpdate::Voice("Voice 2".to_string()));

        wizard.set_field(FieldUpdate::VoiceGender(aw_protocol::VoiceGender::Female));

        assert_eq!(wizard.profile().voice.voice_id, None);
    }

    #[test]
    fn test_gender_change_keeps_shared_voice() {
        let (mut wizard, _rx) = controller(WizardVariant::Enhanced);
        wizard.set_field(FieldUpdate::VoiceGender(aw_protocol::VoiceGender::Male));
        assert_eq!(wizard.profile().voice.voice_id.as_deref(), Some("Voice 1"));
    }

    #[test]
    fn test_unknown_template_keeps_chooser_open() {
        let (mut wizard, mut rx) = controller(WizardVariant::Compact);
        wizard.open_template_chooser();

        assert!(!wizard.choose_template("does-not-exist"));

        assert!(wizard.state().is_choosing_template());
        assert!(drain(&mut rx)
            .iter()
            .any(|e| matches!(e, Event::TemplateNotFound { .. })));
    }

    #[test]
    fn test_navigation_blocked_while_choosing() {
        let (mut wizard, _rx) = controller(WizardVariant::Compact);
        wizard.open_template_chooser();
        assert_eq!(wizard.advance(), Transition::Blocked);
        assert_eq!(wizard.retreat(), Transition::Blocked);
    }

    #[test]
    fn test_toggle_advanced_does_not_gate() {
        let (mut wizard, _rx) = controller(WizardVariant::Enhanced);
        assert!(wizard.toggle_advanced_view());
        assert!(wizard.can_advance());
        assert!(!wizard.toggle_advanced_view());
    }

    #[test]
    fn test_options_from_config() {
        let config = WizardConfig {
            variant: WizardVariant::Compact,
            greeting_policy: GreetingPolicy::Sticky,
            defaults: ProfileDefaults::default(),
        };
        let options = WizardOptions::from(&config);
        assert_eq!(options.variant, WizardVariant::Compact);
        assert_eq!(options.greeting_policy, GreetingPolicy::Sticky);
        assert!(options.initial_template.is_none());
    }
}
