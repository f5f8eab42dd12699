//! Screen-level onboarding flow
//!
//! Login → Welcome → Questionnaire → Photo upload → Analysis → Results.
//! The flow owns the questionnaire session while it is on screen and drops
//! it (and its answers) as soon as the questionnaire is left.

use crate::answers::AnswerSet;
use crate::delay::DelayedTransition;
use crate::error::{Error, Result};
use crate::sequencer::{Advance, Retreat};
use crate::session::{Navigator, QuestionnaireSession};
use crate::store::AnswerPolicy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Accepted photo file extensions
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "heic", "heif",
];

/// Onboarding screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Welcome,
    Questionnaire,
    PhotoUpload,
    Analysis,
    Results,
}

/// Sign-in form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Decides whether a sign-in succeeds
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> bool;
}

/// Accepts any well-formed email with a non-empty password
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    email_pattern: Regex,
}

impl MockAuthenticator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            email_pattern: Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?,
        })
    }
}

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> bool {
        self.email_pattern.is_match(credentials.email.trim()) && !credentials.password.is_empty()
    }
}

/// Outcome of a photo library permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Photo library / camera access
pub trait ImageSource {
    fn request_permission(&mut self) -> Permission;
    /// `None` when the user cancels
    fn pick_image(&mut self) -> Option<PathBuf>;
}

/// Image source backed by a path typed by the user
#[derive(Debug, Clone, Default)]
pub struct PathImageSource {
    path: Option<PathBuf>,
}

impl PathImageSource {
    /// An empty or blank path counts as cancelling the picker
    pub fn new(path: &str) -> Self {
        let path = path.trim().trim_matches(|c| c == '"' || c == '\'');
        Self {
            path: (!path.is_empty()).then(|| PathBuf::from(path)),
        }
    }
}

impl ImageSource for PathImageSource {
    fn request_permission(&mut self) -> Permission {
        match self.path.as_deref().map(std::fs::metadata) {
            Some(Err(e)) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Permission::Denied
            }
            _ => Permission::Granted,
        }
    }

    fn pick_image(&mut self) -> Option<PathBuf> {
        self.path.take().filter(|path| path.is_file())
    }
}

/// Reject anything that is not an image by extension
pub fn validate_image(path: &Path) -> Result<()> {
    let is_image = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.iter().any(|e| *e == ext)
        })
        .unwrap_or(false);

    if is_image {
        Ok(())
    } else {
        Err(Error::UnsupportedImage {
            path: path.to_path_buf(),
        })
    }
}

/// Simulated latencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTimings {
    pub login_delay: Duration,
    pub analysis_delay: Duration,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(1500),
            analysis_delay: Duration::from_millis(5000),
        }
    }
}

/// Records where the questionnaire wants to go
#[derive(Debug, Default)]
struct Redirect {
    target: Option<Screen>,
}

impl Navigator for Redirect {
    fn advance(&mut self, _answers: Arc<AnswerSet>) {
        self.target = Some(Screen::PhotoUpload);
    }

    fn retreat(&mut self) {
        self.target = Some(Screen::Welcome);
    }
}

/// The whole onboarding flow
#[derive(Debug)]
pub struct OnboardingFlow {
    screen: Screen,
    policy: AnswerPolicy,
    timings: FlowTimings,
    session: Option<QuestionnaireSession>,
    photo: Option<PathBuf>,
    pending: Option<DelayedTransition>,
}

impl OnboardingFlow {
    pub fn new(policy: AnswerPolicy, timings: FlowTimings) -> Self {
        Self {
            screen: Screen::Login,
            policy,
            timings,
            session: None,
            photo: None,
            pending: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Whether a delayed transition is in flight
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn session(&self) -> Option<&QuestionnaireSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut QuestionnaireSession> {
        self.session.as_mut()
    }

    pub fn photo(&self) -> Option<&Path> {
        self.photo.as_deref()
    }

    /// Progress of the pending analysis, 0.0 when none is running
    pub fn analysis_progress(&self) -> f64 {
        match (&self.pending, self.screen) {
            (Some(pending), Screen::Analysis) => pending.progress_ratio(),
            (None, Screen::Results) => 1.0,
            _ => 0.0,
        }
    }

    fn go(&mut self, screen: Screen) {
        info!(from = ?self.screen, to = ?screen, "Screen change");
        if self.screen == Screen::Questionnaire && screen != Screen::Questionnaire {
            // Answers are not kept once the questionnaire is left
            self.session = None;
        }
        if screen == Screen::Questionnaire {
            self.session = Some(QuestionnaireSession::new(self.policy));
            self.photo = None;
        }
        self.pending = None;
        self.screen = screen;
    }

    /// Poll the pending transition. Returns `true` when the screen changed.
    pub fn tick(&mut self) -> bool {
        let fired = self.pending.as_mut().map(|p| p.poll()).unwrap_or(false);
        if !fired {
            return false;
        }
        match self.screen {
            Screen::Login => self.go(Screen::Welcome),
            Screen::Analysis => self.go(Screen::Results),
            // Delays only run on these two screens
            _ => return false,
        }
        true
    }

    /// Submit the sign-in form; on success the welcome screen follows after
    /// the login delay
    pub fn submit_login(
        &mut self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<()> {
        if self.screen != Screen::Login || self.pending.is_some() {
            debug!(screen = ?self.screen, busy = self.is_busy(), "Sign-in submit ignored");
            return Ok(());
        }
        if !authenticator.authenticate(credentials) {
            warn!(email = %credentials.email, "Sign-in rejected");
            return Err(Error::AuthenticationFailed {
                email: credentials.email.clone(),
            });
        }
        info!(email = %credentials.email, "Signing in");
        self.pending = Some(DelayedTransition::start("sign-in", self.timings.login_delay));
        Ok(())
    }

    /// Welcome → questionnaire with fresh default answers
    pub fn get_started(&mut self) {
        if self.screen == Screen::Welcome {
            self.go(Screen::Questionnaire);
        }
    }

    /// Forward action inside the questionnaire
    pub fn questionnaire_next(&mut self) -> Option<Advance> {
        let mut redirect = Redirect::default();
        let outcome = self.session.as_mut()?.next(&mut redirect);
        if let Some(target) = redirect.target {
            self.go(target);
        }
        Some(outcome)
    }

    /// Backward action inside the questionnaire
    pub fn questionnaire_back(&mut self) -> Option<Retreat> {
        let mut redirect = Redirect::default();
        let outcome = self.session.as_mut()?.back(&mut redirect);
        if let Some(target) = redirect.target {
            self.go(target);
        }
        Some(outcome)
    }

    /// Ask `source` for a photo and keep it if it is an image
    pub fn select_photo(&mut self, source: &mut dyn ImageSource) -> Result<&Path> {
        if source.request_permission() == Permission::Denied {
            warn!("Photo permission denied");
            return Err(Error::PermissionDenied);
        }
        let path = source.pick_image().ok_or(Error::ImageCancelled)?;
        validate_image(&path)?;
        info!(photo = %path.display(), "Photo selected");
        Ok(self.photo.insert(path).as_path())
    }

    pub fn remove_photo(&mut self) {
        self.photo = None;
    }

    /// Photo upload → questionnaire, starting over
    pub fn photo_back(&mut self) {
        if self.screen == Screen::PhotoUpload {
            self.go(Screen::Questionnaire);
        }
    }

    /// Photo upload → analysis. Needs a selected photo.
    pub fn continue_to_analysis(&mut self) -> bool {
        if self.screen != Screen::PhotoUpload || self.photo.is_none() {
            return false;
        }
        self.go(Screen::Analysis);
        self.pending = Some(DelayedTransition::start(
            "analysis",
            self.timings.analysis_delay,
        ));
        true
    }

    /// Leave the analysis screen early; the pending result is discarded
    pub fn leave_analysis(&mut self) {
        if self.screen == Screen::Analysis {
            if let Some(pending) = self.pending.take() {
                pending.cancel();
            }
            self.go(Screen::PhotoUpload);
        }
    }

    /// Results → photo upload
    pub fn results_back(&mut self) {
        if self.screen == Screen::Results {
            self.go(Screen::PhotoUpload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{ActivityLevel, FieldValue, Gender, Goal, Motivation};

    struct FixedSource {
        permission: Permission,
        image: Option<PathBuf>,
    }

    impl ImageSource for FixedSource {
        fn request_permission(&mut self) -> Permission {
            self.permission
        }

        fn pick_image(&mut self) -> Option<PathBuf> {
            self.image.clone()
        }
    }

    fn instant() -> FlowTimings {
        FlowTimings {
            login_delay: Duration::ZERO,
            analysis_delay: Duration::ZERO,
        }
    }

    fn wait_for(flow: &mut OnboardingFlow, screen: Screen) {
        for _ in 0..200 {
            if flow.tick() || flow.screen() == screen {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(flow.screen(), screen);
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_mock_authenticator() {
        let auth = MockAuthenticator::new().unwrap();
        assert!(auth.authenticate(&credentials("sam@example.com", "secret")));
        assert!(!auth.authenticate(&credentials("sam@example", "secret")));
        assert!(!auth.authenticate(&credentials("sam@example.com", "")));
    }

    #[test]
    fn test_rejected_login_stays_on_login() {
        let auth = MockAuthenticator::new().unwrap();
        let mut flow = OnboardingFlow::new(AnswerPolicy::Lenient, instant());
        let err = flow
            .submit_login(&auth, &credentials("not-an-email", "pw"))
            .unwrap_err();
        assert!(matches!(err, Error::AuthenticationFailed { .. }));
        assert!(!flow.is_busy());
        assert_eq!(flow.screen(), Screen::Login);
    }

    #[test]
    fn test_login_waits_for_delay() {
        let auth = MockAuthenticator::new().unwrap();
        let timings = FlowTimings {
            login_delay: Duration::from_secs(30),
            ..instant()
        };
        let mut flow = OnboardingFlow::new(AnswerPolicy::Lenient, timings);
        flow.submit_login(&auth, &credentials("a@b.co", "pw")).unwrap();
        assert!(flow.is_busy());
        assert!(!flow.tick());
        assert_eq!(flow.screen(), Screen::Login);

        // A second submit while signing in is ignored, even with bad input
        assert!(flow.submit_login(&auth, &credentials("bad", "")).is_ok());
        assert!(flow.is_busy());
    }

    #[test]
    fn test_submit_login_ignored_off_login_screen() {
        let auth = MockAuthenticator::new().unwrap();
        let mut flow = OnboardingFlow::new(AnswerPolicy::Lenient, instant());
        flow.submit_login(&auth, &credentials("a@b.co", "pw")).unwrap();
        wait_for(&mut flow, Screen::Welcome);

        assert!(flow.submit_login(&auth, &credentials("a@b.co", "pw")).is_ok());
        assert!(!flow.is_busy());
        assert!(!flow.tick());
        assert_eq!(flow.screen(), Screen::Welcome);
    }

    #[test]
    fn test_full_flow() {
        let auth = MockAuthenticator::new().unwrap();
        let mut flow = OnboardingFlow::new(AnswerPolicy::Lenient, instant());
        flow.submit_login(&auth, &credentials("a@b.co", "pw")).unwrap();
        wait_for(&mut flow, Screen::Welcome);

        flow.get_started();
        assert_eq!(flow.screen(), Screen::Questionnaire);
        let session = flow.session_mut().unwrap();
        session.update(FieldValue::Gender(Some(Gender::Male)));
        session.update(FieldValue::Goals([Goal::LoseFat].into_iter().collect()));
        session.update(FieldValue::ActivityLevel(Some(ActivityLevel::Active)));
        session.update(FieldValue::Motivations([Motivation::Looks].into_iter().collect()));

        while flow.screen() == Screen::Questionnaire {
            assert_ne!(flow.questionnaire_next(), Some(Advance::Blocked));
        }
        assert_eq!(flow.screen(), Screen::PhotoUpload);
        assert!(flow.session().is_none());

        assert!(!flow.continue_to_analysis());
        let mut source = FixedSource {
            permission: Permission::Granted,
            image: Some(PathBuf::from("front.JPG")),
        };
        flow.select_photo(&mut source).unwrap();
        assert!(flow.continue_to_analysis());
        wait_for(&mut flow, Screen::Results);
        assert_eq!(flow.analysis_progress(), 1.0);

        flow.results_back();
        assert_eq!(flow.screen(), Screen::PhotoUpload);
    }

    #[test]
    fn test_questionnaire_back_returns_to_welcome() {
        let mut flow = OnboardingFlow::new(AnswerPolicy::Lenient, instant());
        flow.go(Screen::Welcome);
        flow.get_started();
        assert_eq!(flow.questionnaire_back(), Some(Retreat::Exited));
        assert_eq!(flow.screen(), Screen::Welcome);
        assert!(flow.session().is_none());
    }

    #[test]
    fn test_photo_back_restarts_questionnaire() {
        let mut flow = OnboardingFlow::new(AnswerPolicy::Lenient, instant());
        flow.go(Screen::PhotoUpload);
        flow.photo_back();
        assert_eq!(flow.screen(), Screen::Questionnaire);
        let session = flow.session().unwrap();
        assert_eq!(session.sequencer().position(), 1);
        assert!(session.store().answers().gender.is_none());
    }

    #[test]
    fn test_photo_errors() {
        let mut flow = OnboardingFlow::new(AnswerPolicy::Lenient, instant());
        flow.go(Screen::PhotoUpload);

        let mut denied = FixedSource {
            permission: Permission::Denied,
            image: Some(PathBuf::from("a.png")),
        };
        assert!(matches!(
            flow.select_photo(&mut denied),
            Err(Error::PermissionDenied)
        ));

        let mut cancelled = FixedSource {
            permission: Permission::Granted,
            image: None,
        };
        assert!(matches!(
            flow.select_photo(&mut cancelled),
            Err(Error::ImageCancelled)
        ));

        let mut document = FixedSource {
            permission: Permission::Granted,
            image: Some(PathBuf::from("notes.pdf")),
        };
        assert!(matches!(
            flow.select_photo(&mut document),
            Err(Error::UnsupportedImage { .. })
        ));
        assert!(flow.photo().is_none());
    }

    #[test]
    fn test_path_image_source() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("front.png");
        std::fs::write(&photo, b"not really a png").unwrap();

        let mut flow = OnboardingFlow::new(AnswerPolicy::Lenient, instant());
        flow.go(Screen::PhotoUpload);

        let typed = format!("  \"{}\" ", photo.display());
        let selected = flow
            .select_photo(&mut PathImageSource::new(&typed))
            .unwrap()
            .to_path_buf();
        assert_eq!(selected, photo);

        let missing = dir.path().join("missing.png");
        let mut source = PathImageSource::new(&missing.display().to_string());
        assert!(matches!(
            flow.select_photo(&mut source),
            Err(Error::ImageCancelled)
        ));
        assert!(matches!(
            flow.select_photo(&mut PathImageSource::new("   ")),
            Err(Error::ImageCancelled)
        ));
        assert_eq!(flow.photo(), Some(photo.as_path()));
    }

    #[test]
    fn test_validate_image_extensions() {
        assert!(validate_image(Path::new("a/b/side.HEIC")).is_ok());
        assert!(validate_image(Path::new("back.webp")).is_ok());
        assert!(validate_image(Path::new("archive.tar.gz")).is_err());
        assert!(validate_image(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_leaving_analysis_discards_result() {
        let timings = FlowTimings {
            analysis_delay: Duration::from_millis(100),
            ..instant()
        };
        let mut flow = OnboardingFlow::new(AnswerPolicy::Lenient, timings);
        flow.go(Screen::PhotoUpload);
        flow.photo = Some(PathBuf::from("side.png"));
        assert!(flow.continue_to_analysis());
        flow.leave_analysis();
        assert_eq!(flow.screen(), Screen::PhotoUpload);

        std::thread::sleep(Duration::from_millis(200));
        assert!(!flow.tick());
        assert_eq!(flow.screen(), Screen::PhotoUpload);
    }
}
