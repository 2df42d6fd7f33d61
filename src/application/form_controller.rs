use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::application::{
    ChatClient, ClipboardService, CopyResultUseCase, EnhancePromptUseCase, Notifier,
};
use crate::domain::{
    instruction_template, DomainError, MediaMode, Notification, RequestState, SubmissionStatus,
};

#[derive(Debug, Default)]
struct FormState {
    request: RequestState,
    status: SubmissionStatus,
    response: Option<String>,
}

impl FormState {
    fn abandon_in_flight(&mut self) {
        if self.status.is_in_flight() {
            self.status = SubmissionStatus::Failed;
        }
    }
}

/// Marks the form `Failed` when a submission is dropped before its response
/// arrives, so `InFlight` never outlives the call that set it.
struct InFlightGuard {
    form: Arc<Mutex<FormState>>,
    armed: bool,
}

impl InFlightGuard {
    fn new(form: Arc<Mutex<FormState>>) -> Self {
        Self { form, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        warn!("Submission dropped before the response arrived");
        if let Ok(mut form) = self.form.try_lock() {
            form.abandon_in_flight();
            return;
        }

        // Another task holds the lock for a transition; finish the reset there.
        let form = self.form.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move { form.lock().await.abandon_in_flight() });
            }
            Err(_) => error!("Could not release the form after a dropped submission"),
        }
    }
}

/// Controller behind the prompt enhancement form.
///
/// Owns the editable [`RequestState`], the submission status and the last
/// response. The state lock is held only for transitions, never across the
/// remote call: a concurrent [`submit`](Self::submit) is turned away by the
/// `InFlight` status, the same way a disabled submit button would.
pub struct PromptFormController {
    enhance: EnhancePromptUseCase,
    copy: CopyResultUseCase,
    notifier: Arc<dyn Notifier>,
    form: Arc<Mutex<FormState>>,
}

impl PromptFormController {
    pub fn new(
        chat_client: Arc<dyn ChatClient>,
        clipboard: Arc<dyn ClipboardService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_state(chat_client, clipboard, notifier, RequestState::default())
    }

    pub fn with_state(
        chat_client: Arc<dyn ChatClient>,
        clipboard: Arc<dyn ClipboardService>,
        notifier: Arc<dyn Notifier>,
        request: RequestState,
    ) -> Self {
        Self {
            enhance: EnhancePromptUseCase::new(chat_client),
            copy: CopyResultUseCase::new(clipboard),
            notifier,
            form: Arc::new(Mutex::new(FormState {
                request,
                ..FormState::default()
            })),
        }
    }

    pub async fn update_prompt(&self, text: impl Into<String>) {
        self.form.lock().await.request.set_prompt(text);
    }

    /// Switch mode. The instruction template is regenerated for the new mode
    /// and any manual edit to it is lost.
    pub async fn update_mode(&self, mode: MediaMode) {
        let mut form = self.form.lock().await;
        if form.request.instruction_template() != instruction_template(form.request.mode()) {
            debug!("Discarding edited instruction template on switch to {mode}");
        }
        form.request.set_mode(mode);
    }

    pub async fn update_instruction_template(&self, text: impl Into<String>) {
        self.form.lock().await.request.set_instruction_template(text);
    }

    /// Accepts any integer; values outside `[1, 2000]` are clamped.
    pub async fn update_output_length_bound(&self, n: i64) {
        self.form.lock().await.request.set_output_length_bound(n);
    }

    /// Submit the current form state.
    ///
    /// Returns the completion text on success. Every failure also produces a
    /// user-facing notification; remote error details are only logged.
    /// Dropping the returned future mid-call leaves the form `Failed`.
    pub async fn submit(&self) -> Result<String, DomainError> {
        let prepared = {
            let mut form = self.form.lock().await;
            if form.status.is_in_flight() {
                warn!("Submit ignored: a request is already in flight");
                return Err(DomainError::SubmissionInFlight);
            }

            let prepared = EnhancePromptUseCase::prepare(&form.request);
            if prepared.is_ok() {
                form.status = SubmissionStatus::InFlight;
            }
            prepared
        };

        let request = match prepared {
            Ok(request) => request,
            Err(e) => {
                debug!("Submit rejected: {e}");
                self.notifier.notify(Notification::empty_prompt());
                return Err(e);
            }
        };

        let guard = InFlightGuard::new(self.form.clone());
        let result = self.enhance.execute(&request).await;

        let mut form = self.form.lock().await;
        guard.disarm();
        match result {
            Ok(text) => {
                form.response = Some(text.clone());
                form.status = SubmissionStatus::Succeeded;
                drop(form);

                info!("Prompt improved");
                self.notifier.notify(Notification::prompt_improved());
                Ok(text)
            }
            Err(e) => {
                form.status = SubmissionStatus::Failed;
                drop(form);

                error!("Error improving prompt: {e}");
                self.notifier.notify(Notification::improve_failed());
                Err(e)
            }
        }
    }

    /// Copy the current response (empty when there is none) to the clipboard.
    pub async fn copy_result(&self) -> Result<(), DomainError> {
        let text = self.form.lock().await.response.clone().unwrap_or_default();

        match self.copy.execute(&text) {
            Ok(()) => {
                self.notifier.notify(Notification::copied());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to copy: {e}");
                self.notifier.notify(Notification::copy_failed());
                Err(e)
            }
        }
    }

    pub async fn request_state(&self) -> RequestState {
        self.form.lock().await.request.clone()
    }

    pub async fn status(&self) -> SubmissionStatus {
        self.form.lock().await.status
    }

    pub async fn response(&self) -> Option<String> {
        self.form.lock().await.response.clone()
    }

    /// Whether the submit control should be enabled.
    pub async fn can_submit(&self) -> bool {
        !self.status().await.is_in_flight()
    }
}
