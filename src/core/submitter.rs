use crate::core::render::{render_error, render_roadmap};
use crate::core::{FormSource, OutputContainer, RoadmapService};
use crate::domain::model::{
    FieldIds, RenderStyle, RoadmapRequest, RoadmapStep, SubmitEvent, SubmitOutcome,
};
use crate::utils::error::{Result, RoadmapError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Drives one submit-request-render cycle per form submission.
pub struct RoadmapSubmitter<S: RoadmapService> {
    service: S,
    field_ids: FieldIds,
    style: RenderStyle,
    timeout: Duration,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag and re-enables the submit control on every exit path.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
    form: &'a dyn FormSource,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.form.set_submit_enabled(true);
    }
}

impl<S: RoadmapService> RoadmapSubmitter<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            field_ids: FieldIds::default(),
            style: RenderStyle::default(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_field_ids(mut self, field_ids: FieldIds) -> Self {
        self.field_ids = field_ids;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit-event handler. Never fails: every error ends up rendered into `container`.
    pub async fn on_submit(
        &self,
        event: &mut SubmitEvent,
        form: &dyn FormSource,
        container: &dyn OutputContainer,
    ) -> SubmitOutcome {
        event.prevent_default();

        match self.submit(form, container).await {
            Ok(steps) => SubmitOutcome::Rendered { steps: steps.len() },
            Err(RoadmapError::Busy) => {
                tracing::debug!("Submission ignored, a request is already in flight");
                SubmitOutcome::Ignored
            }
            Err(e) => {
                tracing::warn!("Roadmap submission failed: {}", e);
                if let Err(render_err) = render_error(container, &e) {
                    tracing::error!("Could not render error state: {}", render_err);
                }
                SubmitOutcome::Failed(e.kind())
            }
        }
    }

    /// Collects input, calls the service and renders the roadmap.
    /// On error the container is left untouched; `on_submit` renders the error.
    pub async fn submit(
        &self,
        form: &dyn FormSource,
        container: &dyn OutputContainer,
    ) -> Result<Vec<RoadmapStep>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(RoadmapError::Busy);
        }
        form.set_submit_enabled(false);
        let _guard = InFlightGuard {
            flag: &self.in_flight,
            form,
        };

        let request = self.collect_request(form)?;
        tracing::info!(
            "Requesting roadmap for goal '{}' ({}, {}h/day)",
            request.goal,
            request.learning_style,
            request.daily_time
        );

        let call = self.service.generate(&request);
        let steps = match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result?,
            Err(_) => return Err(RoadmapError::Timeout(self.timeout)),
        };
        tracing::debug!("Received {} roadmap steps", steps.len());

        render_roadmap(container, &request, &steps, self.style)?;
        Ok(steps)
    }

    /// Builds a fresh request from the current form values.
    pub fn collect_request(&self, form: &dyn FormSource) -> Result<RoadmapRequest> {
        let ids = &self.field_ids;
        let goal = read_field(form, &ids.goal)?;
        let learning_style = read_field(form, &ids.learning_style)?;
        let raw_daily_time = read_field(form, &ids.daily_time)?;
        let daily_time = parse_daily_time(&ids.daily_time, &raw_daily_time)?;

        Ok(RoadmapRequest {
            goal,
            learning_style,
            daily_time,
        })
    }
}

fn read_field(form: &dyn FormSource, id: &str) -> Result<String> {
    form.value(id).ok_or_else(|| RoadmapError::MissingField {
        field: id.to_string(),
    })
}

/// Parses a non-negative whole number of hours.
pub fn parse_daily_time(field: &str, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RoadmapError::InputParse {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "expected a non-negative whole number".to_string(),
        });
    }

    trimmed.parse::<u32>().map_err(|e| RoadmapError::InputParse {
        field: field.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
