//! Wizard controller.
//!
//! This module coordinates the wizard state machine, the validation gate and
//! the side effects (submission sink, draft persistence, state events).

use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use kyc_core::ports::{
    ApplicationIdPort, ClockPort, DraftStoreError, SubmissionSinkPort, WizardEventPort,
};
use kyc_core::submission::reasons;
use kyc_core::wizard::{ValidationGate, WizardAction, WizardEvent, WizardStateMachine};
use kyc_core::{
    Draft, DraftKey, FieldStore, FieldUpdate, StepIndex, SubmissionOutcome, SubmissionPayload,
    ValidationReport, WizardError, WizardState,
};

use crate::deps::AppDeps;
use crate::usecases::draft::{LoadDraft, SaveDraft};
use crate::usecases::wizard::context::WizardContext;

/// Errors produced by the wizard controller.
#[derive(Debug, thiserror::Error)]
pub enum WizardControllerError {
    /// The operation is not allowed in the current state. A caller bug.
    #[error(transparent)]
    Wizard(#[from] WizardError),
    /// The draft store failed; wizard state and fields are untouched.
    #[error("draft persistence failed: {0}")]
    DraftStore(#[from] DraftStoreError),
}

impl WizardControllerError {
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            WizardControllerError::Wizard(WizardError::PreconditionViolation { .. })
        )
    }
}

/// Result of a navigation or submit call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardResponse {
    pub state: WizardState,
    /// `Passed` unless the gate refused the move.
    pub report: ValidationReport,
}

impl WizardResponse {
    pub fn ok(&self) -> bool {
        self.report.is_passed()
    }

    pub fn missing(&self) -> &[kyc_core::FieldPath] {
        self.report.missing()
    }
}

#[derive(Debug)]
struct Dispatched {
    state: WizardState,
    report: ValidationReport,
    draft: Option<Draft>,
}

/// Drives one wizard session.
///
/// Every mutating call takes the dispatch lock for its whole duration, sink
/// and draft I/O included, so calls made while a submit is in flight run
/// afterwards against the post-submit state.
pub struct WizardController {
    session: DraftKey,
    context: Arc<WizardContext>,

    save_draft: SaveDraft,
    load_draft: LoadDraft,
    submission_sink: Arc<dyn SubmissionSinkPort>,
    application_ids: Arc<dyn ApplicationIdPort>,
    wizard_events: Arc<dyn WizardEventPort>,
    clock: Arc<dyn ClockPort>,
}

impl WizardController {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        session: DraftKey,
        context: Arc<WizardContext>,
        save_draft: SaveDraft,
        load_draft: LoadDraft,
        submission_sink: Arc<dyn SubmissionSinkPort>,
        application_ids: Arc<dyn ApplicationIdPort>,
        wizard_events: Arc<dyn WizardEventPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            session,
            context,
            save_draft,
            load_draft,
            submission_sink,
            application_ids,
            wizard_events,
            clock,
        }
    }

    /// Fresh session at step 1 with an empty field store.
    pub fn from_deps(session: DraftKey, deps: &AppDeps) -> Self {
        Self::new(
            session,
            WizardContext::default().arc(),
            SaveDraft::from_ports(deps.draft_store.clone(), deps.clock.clone()),
            LoadDraft::from_ports(deps.draft_store.clone()),
            deps.submission_sink.clone(),
            deps.application_ids.clone(),
            deps.wizard_events.clone(),
            deps.clock.clone(),
        )
    }

    pub fn session(&self) -> &DraftKey {
        &self.session
    }

    pub async fn state(&self) -> WizardState {
        self.context.get_state().await
    }

    pub async fn fields(&self) -> FieldStore {
        self.context.get_fields().await
    }

    pub async fn progress_percent(&self) -> u8 {
        self.context.get_state().await.progress_percent()
    }

    /// Gate the current step and advance on success.
    pub async fn next(&self) -> Result<WizardResponse, WizardControllerError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let state = self.context.get_state().await;
        let fields = self.context.get_fields().await;
        let report = ValidationGate::can_advance(state.current_step, &fields, self.clock.today());
        self.dispatch(WizardEvent::Advance { report })
            .await
            .map(Dispatched::into_response)
    }

    /// Step back one page. Never validates and never touches the data.
    pub async fn previous(&self) -> Result<WizardResponse, WizardControllerError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.dispatch(WizardEvent::Retreat)
            .await
            .map(Dispatched::into_response)
    }

    pub async fn go_to(&self, target: StepIndex) -> Result<WizardResponse, WizardControllerError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.dispatch(WizardEvent::Jump { target })
            .await
            .map(Dispatched::into_response)
    }

    /// Hand the data to the submission sink.
    ///
    /// Returns with the state `submitted` or `failed`, or unchanged with an
    /// incomplete report when an earlier step no longer passes.
    pub async fn submit(&self) -> Result<WizardResponse, WizardControllerError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let fields = self.context.get_fields().await;
        let report = ValidationGate::can_advance(StepIndex::LAST, &fields, self.clock.today());
        self.dispatch(WizardEvent::BeginSubmit { report })
            .await
            .map(Dispatched::into_response)
    }

    /// Persist the current fields and step. Leaves the wizard state alone.
    pub async fn save_draft(&self) -> Result<Draft, WizardControllerError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let dispatched = self.dispatch(WizardEvent::SaveDraft).await?;
        dispatched.draft.ok_or(WizardControllerError::Wizard(
            WizardError::PreconditionViolation {
                operation: kyc_core::wizard::WizardOperation::SaveDraft,
                status: dispatched.state.status,
                step: dispatched.state.current_step,
            },
        ))
    }

    /// Replace one field. A change that breaks an earlier step lowers the
    /// validated watermark accordingly.
    pub async fn update_field(&self, update: FieldUpdate) -> Result<WizardState, WizardControllerError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let path = update.path();
        let fields = self.context.get_fields().await.apply(update);
        let passing_prefix = ValidationGate::passing_prefix(&fields, self.clock.today());
        let dispatched = self
            .dispatch_with_fields(WizardEvent::FieldsChanged { passing_prefix }, Some(fields))
            .await?;
        debug!(session = %self.session, field = %path, "wizard field updated");
        Ok(dispatched.state)
    }

    /// Look up the draft saved for this session, to offer a resume.
    pub async fn load_draft(&self) -> Result<Option<Draft>, WizardControllerError> {
        Ok(self.load_draft.execute(&self.session).await?)
    }

    /// Continue from a saved draft.
    ///
    /// The step is clamped to the first step whose data does not pass yet.
    pub async fn resume(&self, draft: Draft) -> Result<WizardState, WizardControllerError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let passing_prefix = ValidationGate::passing_prefix(&draft.field_store, self.clock.today());
        let dispatched = self
            .dispatch_with_fields(
                WizardEvent::Restore {
                    current_step: draft.current_step,
                    passing_prefix,
                },
                Some(draft.field_store),
            )
            .await?;
        self.context.set_submission(None).await;
        info!(
            session = %self.session,
            step = %dispatched.state.current_step,
            saved_at = %draft.saved_at,
            "wizard resumed from draft"
        );
        Ok(dispatched.state)
    }

    /// Discard everything and begin again at step 1.
    pub async fn start_new(&self) -> WizardState {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let state = WizardState::default();
        self.context.set_fields(FieldStore::default()).await;
        self.context.set_submission(None).await;
        self.set_state_and_emit(state.clone()).await;
        info!(session = %self.session, "wizard restarted");
        state
    }

    /// Callers must hold the dispatch lock.
    async fn dispatch(&self, event: WizardEvent) -> Result<Dispatched, WizardControllerError> {
        self.dispatch_with_fields(event, None).await
    }

    /// Like `dispatch`, but `staged_fields` replace the field store once the
    /// first transition is accepted and before its state is published. A
    /// refused transition leaves the store untouched.
    async fn dispatch_with_fields(
        &self,
        event: WizardEvent,
        mut staged_fields: Option<FieldStore>,
    ) -> Result<Dispatched, WizardControllerError> {
        let span = info_span!("usecase.wizard.dispatch", session = %self.session);
        async {
            let mut current = self.context.get_state().await;
            let mut dispatched = Dispatched {
                state: current.clone(),
                report: ValidationReport::Passed,
                draft: None,
            };
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let event_name = format!("{:?}", event);
                let (next, actions) = WizardStateMachine::transition(&current, event)?;
                info!(from = ?current, to = ?next, event = %event_name, "wizard state transition");
                if let Some(fields) = staged_fields.take() {
                    self.context.set_fields(fields).await;
                }
                if next != current {
                    self.set_state_and_emit(next.clone()).await;
                }
                current = next;
                let follow_up_events = self
                    .execute_actions(&current, actions, &mut dispatched)
                    .await?;
                pending_events.extend(follow_up_events);
            }

            dispatched.state = current;
            Ok(dispatched)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        state: &WizardState,
        actions: Vec<WizardAction>,
        dispatched: &mut Dispatched,
    ) -> Result<Vec<WizardEvent>, WizardControllerError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "wizard executing action");
            match action {
                WizardAction::ReportIncomplete { report } => {
                    info!(
                        step = %state.current_step,
                        missing = report.missing().len(),
                        invalid = report.invalid().len(),
                        "wizard step incomplete"
                    );
                    dispatched.report = report;
                }
                WizardAction::InvokeSubmissionSink => {
                    follow_up_events.push(self.invoke_submission_sink().await);
                }
                WizardAction::PersistDraft => {
                    let fields = self.context.get_fields().await;
                    let draft = self
                        .save_draft
                        .execute(&self.session, fields, state.current_step)
                        .await
                        .map_err(|err| {
                            warn!(error = %err, "wizard draft save failed");
                            err
                        })?;
                    dispatched.draft = Some(draft);
                }
            }
        }
        Ok(follow_up_events)
    }

    /// Sink errors count as a rejection so the caller can retry.
    async fn invoke_submission_sink(&self) -> WizardEvent {
        let fields = self.context.get_fields().await;
        // A retry with unchanged data resubmits the retained snapshot.
        let payload = match self.context.get_submission().await {
            Some(previous) if previous.fields == fields => previous,
            _ => SubmissionPayload {
                application_id: self.application_ids.next_id(),
                fields,
            },
        };
        self.context.set_submission(Some(payload.clone())).await;
        let application_id = payload.application_id.clone();

        match self.submission_sink.submit(payload).await {
            Ok(SubmissionOutcome::Accepted { application_id }) => {
                info!(application_id = %application_id, "submission accepted");
                WizardEvent::SubmissionAccepted { application_id }
            }
            Ok(SubmissionOutcome::Rejected { reason }) => {
                warn!(application_id = %application_id, reason = %reason, "submission rejected");
                WizardEvent::SubmissionRejected { reason }
            }
            Err(err) => {
                error!(application_id = %application_id, error = %err, "submission sink failed");
                WizardEvent::SubmissionRejected {
                    reason: reasons::SINK_UNAVAILABLE.to_string(),
                }
            }
        }
    }

    async fn set_state_and_emit(&self, state: WizardState) {
        self.context.set_state(state.clone()).await;
        self.wizard_events
            .emit_wizard_state_changed(&self.session, state)
            .await;
    }
}

impl Dispatched {
    fn into_response(self) -> WizardResponse {
        WizardResponse {
            state: self.state,
            report: self.report,
        }
    }
}
