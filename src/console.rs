//! Terminal front end: renders the site's sections as text and maps typed
//! commands onto the translation store and the registration form.

use crate::config::Config;
use crate::i18n::{Locale, LocaleError, LocaleRegistry, TranslationKey, TranslationStore};
use crate::notify::SharedNotifier;
use crate::registration::{
    Character, Field, FormSnapshot, PreRegistrationForm, RetryingRegistrationService,
    SimulatedRegistrationService, SubmissionState, SubmitOutcome,
};
use crate::retry::RetryConfig;
use crate::rewards::{format_count, RewardTracker};
use crate::scheduler::{ScheduledTask, Scheduler};
use anyhow::Result;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

pub const HELP: &str = "\
Commands:
  email <address>      set the email field
  nickname <name>      set the nickname field
  character <id>       dark-knight | blood-mage | shadow-archer
  lang <code>          ko | en | ja
  submit               submit the pre-registration form
  form                 show the form
  rewards              show reward milestones
  page                 show the whole page
  help                 show this help
  quit                 leave";

/// A parsed user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Language(Locale),
    Submit,
    Form,
    Rewards,
    Page,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "email" => Command::Set(Field::Email, rest.to_string()),
        "nickname" => Command::Set(Field::Nickname, rest.to_string()),
        "character" => Command::Set(Field::PreferredCharacter, rest.to_string()),
        "lang" | "language" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("lang"));
            }
            Command::Language(Locale::from_code(rest)?)
        }
        "submit" => Command::Submit,
        "form" => Command::Form,
        "rewards" => Command::Rewards,
        "page" => Command::Page,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Silent,
    Quit,
}

/// One visitor's session: store, form, reward counter and their timers.
pub struct Session {
    store: Arc<TranslationStore>,
    form: Arc<PreRegistrationForm>,
    rewards: Arc<RewardTracker>,
    scheduler: Scheduler,
    submission: Mutex<Option<ScheduledTask>>,
    registration_tick: Duration,
}

impl Session {
    pub fn new(config: &Config, notifier: SharedNotifier) -> Self {
        let store = Arc::new(TranslationStore::detect(config.language_tag.as_deref()));

        let retry = RetryConfig {
            max_attempts: config.submit_max_attempts.max(1),
            ..RetryConfig::registration()
        };
        let service = RetryingRegistrationService::new(
            SimulatedRegistrationService::new(config.submit_latency),
            retry,
        );
        let form = PreRegistrationForm::new(
            Arc::clone(&store),
            Arc::new(service),
            notifier,
            config.success_display,
        );

        Self {
            store,
            form: Arc::new(form),
            rewards: Arc::new(RewardTracker::new(config.initial_registrations)),
            scheduler: Scheduler::new(),
            submission: Mutex::new(None),
            registration_tick: config.registration_tick,
        }
    }

    /// Start background timers. Must be called from within a tokio runtime.
    pub fn start(&self) {
        self.rewards
            .start_simulation(&self.scheduler, self.registration_tick);
    }

    pub fn store(&self) -> &Arc<TranslationStore> {
        &self.store
    }

    pub fn form(&self) -> &Arc<PreRegistrationForm> {
        &self.form
    }

    pub fn rewards(&self) -> &Arc<RewardTracker> {
        &self.rewards
    }

    pub fn render_page(&self) -> String {
        render_page(&self.store, &self.form.snapshot(), &self.rewards)
    }

    pub fn handle(&self, command: Command) -> Reply {
        debug!("Handling {:?}", command);
        match command {
            Command::Set(field, value) => {
                if self.form.set_field(field, &value) {
                    Reply::Silent
                } else {
                    Reply::Output(render_form(&self.store, &self.form.snapshot()))
                }
            }
            Command::Language(locale) => {
                self.store.set_locale(locale);
                Reply::Output(self.render_page())
            }
            Command::Submit => {
                self.spawn_submit();
                Reply::Silent
            }
            Command::Form => Reply::Output(render_form(&self.store, &self.form.snapshot())),
            Command::Rewards => Reply::Output(render_rewards(&self.store, &self.rewards)),
            Command::Page => Reply::Output(self.render_page()),
            Command::Help => Reply::Output(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    /// Whether a background submission is still running.
    pub fn submission_in_flight(&self) -> bool {
        self.submission
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Submit in the background so input stays responsive during the backend call.
    ///
    /// The task belongs to the session's scheduler; dropping the session
    /// abandons it and the form returns to editing.
    fn spawn_submit(&self) {
        let form = Arc::clone(&self.form);
        let store = Arc::clone(&self.store);
        let task = self.scheduler.spawn("submit", async move {
            match form.submit().await {
                Ok(SubmitOutcome::Ignored) => debug!("Submit ignored"),
                // Backend failures were already pushed to the notifier
                Err(_) => {}
                Ok(_) => println!("{}", render_form(&store, &form.snapshot())),
            }
        });

        let mut submission = self.submission.lock().unwrap_or_else(PoisonError::into_inner);
        if submission.as_ref().is_some_and(|task| !task.is_finished()) {
            // The form ignores the new submit; keep the handle of the one running
            return;
        }
        *submission = Some(task);
    }
}

/// Read commands line by line until `quit` or end of input.
pub async fn run<R>(session: &Session, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(command)) => match session.handle(command) {
                Reply::Output(text) => println!("{}", text),
                Reply::Silent => {}
                Reply::Quit => break,
            },
            Err(e) => println!("{}", e),
        }
    }
    if session.submission_in_flight() {
        info!("Session ended with a submission in flight; abandoning it");
    } else {
        info!("Session ended");
    }
    Ok(())
}

// ==================== Rendering ====================

const RULE: &str = "────────────────────────────────────────";

pub fn render_page(store: &TranslationStore, form: &FormSnapshot, rewards: &RewardTracker) -> String {
    [
        render_header(store),
        render_hero(store),
        render_intro(store),
        render_characters(store),
        render_form(store, form),
        render_rewards(store, rewards),
        render_footer(store),
    ]
    .join(&format!("\n{}\n", RULE))
}

pub fn render_header(store: &TranslationStore) -> String {
    let t = |key: TranslationKey| store.translate(key);
    let languages: Vec<String> = LocaleRegistry::get()
        .list()
        .iter()
        .map(|config| {
            if config.locale == store.locale() {
                format!("[{}]", config.native_name)
            } else {
                config.native_name.to_string()
            }
        })
        .collect();

    format!(
        "{}\n{} · {} · {} · {}\n{}: {}",
        t(TranslationKey::GameTitle),
        t(TranslationKey::Home),
        t(TranslationKey::Characters),
        t(TranslationKey::PreRegister),
        t(TranslationKey::Rewards),
        t(TranslationKey::Language),
        languages.join(" | ")
    )
}

pub fn render_hero(store: &TranslationStore) -> String {
    let t = |key: TranslationKey| store.translate(key);
    format!(
        "{}\n{}\n{}\n> {}",
        t(TranslationKey::GameTitle).to_uppercase(),
        t(TranslationKey::HeroSubtitle),
        t(TranslationKey::HeroDescription),
        t(TranslationKey::RegisterNow)
    )
}

pub fn render_intro(store: &TranslationStore) -> String {
    let t = |key: TranslationKey| store.translate(key);
    let features = [
        (TranslationKey::FeatureStoryTitle, TranslationKey::FeatureStoryDesc),
        (TranslationKey::FeatureCombatTitle, TranslationKey::FeatureCombatDesc),
        (TranslationKey::FeatureGuildTitle, TranslationKey::FeatureGuildDesc),
        (TranslationKey::ExploreTitle, TranslationKey::ExploreDesc),
    ];

    let mut out = format!(
        "{}\n{}\n",
        t(TranslationKey::GameIntroTitle),
        t(TranslationKey::GameIntroDesc)
    );
    for (title, description) in features {
        let _ = write!(out, "\n• {}\n  {}", t(title), t(description));
    }
    out
}

pub fn render_characters(store: &TranslationStore) -> String {
    let t = |key: TranslationKey| store.translate(key);
    let mut out = t(TranslationKey::CharactersTitle).to_string();
    for character in Character::ALL {
        let _ = write!(
            out,
            "\n\n{} ({}) [{}]\n  {}",
            t(character.name_key()),
            t(character.role_key()),
            character.id(),
            t(character.description_key())
        );
    }
    out
}

pub fn render_form(store: &TranslationStore, form: &FormSnapshot) -> String {
    let t = |key: TranslationKey| store.translate(key);

    if form.state == SubmissionState::Submitted {
        return format!(
            "{}\n{}",
            t(TranslationKey::RegistrationSuccess),
            t(TranslationKey::RegistrationSuccessDetail)
        );
    }

    let mut out = format!(
        "{}\n{}\n",
        t(TranslationKey::PreRegFormTitle),
        t(TranslationKey::PreRegFormDesc)
    );

    for field in [Field::Email, Field::Nickname, Field::PreferredCharacter] {
        let value = match field {
            Field::Email => form.draft.email.clone(),
            Field::Nickname => form.draft.nickname.clone(),
            Field::PreferredCharacter => form
                .draft
                .preferred_character
                .map(|c| t(c.name_key()).to_string())
                .unwrap_or_default(),
        };
        let shown = if value.is_empty() {
            format!("({})", t(field.placeholder_key()))
        } else {
            value
        };
        let _ = write!(out, "\n{}: {}", t(field.label_key()), shown);
        if let Some(error) = form.errors.get(field) {
            let _ = write!(out, "\n  ! {}", t(error.message_key(field)));
        }
    }

    let button = if form.state == SubmissionState::Submitting {
        TranslationKey::Registering
    } else {
        TranslationKey::SubmitRegistration
    };
    let _ = write!(
        out,
        "\n\n[ {} ]\n{}",
        t(button),
        t(TranslationKey::RegistrationBenefits)
    );
    out
}

pub fn render_rewards(store: &TranslationStore, rewards: &RewardTracker) -> String {
    let t = |key: TranslationKey| store.translate(key);
    let active = rewards.active_milestone();

    let mut out = format!(
        "{}\n{}\n\n{}: {} {}\n",
        t(TranslationKey::RewardsTitle),
        t(TranslationKey::RewardsDesc),
        t(TranslationKey::CurrentRegistrations),
        format_count(rewards.count()),
        t(TranslationKey::PlayersRegistered)
    );

    for (index, milestone) in rewards.milestones().iter().enumerate() {
        let marker = if rewards.is_completed(milestone) {
            "✓"
        } else if active == Some(index) {
            "▶"
        } else {
            " "
        };
        let _ = write!(
            out,
            "\n{} {} ({}) - {} [{}]",
            marker,
            t(milestone.title),
            format_count(milestone.target),
            t(milestone.reward),
            progress_bar(rewards.progress_percentage(milestone.target))
        );
    }
    out
}

pub fn render_footer(store: &TranslationStore) -> String {
    let t = |key: TranslationKey| store.translate(key);
    format!(
        "{} · {} · {} · {} · {}\n{}",
        t(TranslationKey::AboutGame),
        t(TranslationKey::Support),
        t(TranslationKey::Legal),
        t(TranslationKey::Privacy),
        t(TranslationKey::Terms),
        t(TranslationKey::Copyright)
    )
}

fn progress_bar(percentage: f64) -> String {
    const WIDTH: usize = 20;
    let filled = ((percentage / 100.0) * WIDTH as f64).round() as usize;
    let filled = filled.min(WIDTH);
    format!(
        "{}{} {:>5.1}%",
        "█".repeat(filled),
        "░".repeat(WIDTH - filled),
        percentage
    )
}
