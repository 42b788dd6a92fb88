use std::fmt;
use std::sync::Arc;

use super::render_pass_event::RenderPassEvent;
use crate::traits::{PipelineHost, RenderPass};

/// Rejected enqueue request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnqueueError {
    /// The same pass handle was already scheduled this frame
    Duplicate { pass: String, stage: RenderPassEvent },
}

impl fmt::Display for EnqueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnqueueError::Duplicate { pass, stage } => {
                write!(f, "pass '{}' already enqueued at {} this frame", pass, stage)
            }
        }
    }
}

impl std::error::Error for EnqueueError {}

/// Per-frame pass list - the reference pipeline host
///
/// Passes run ordered by stage. Within a stage, enqueue order is kept.
#[derive(Default)]
pub struct RenderQueue {
    passes: Vec<Arc<dyn RenderPass>>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop this frame's passes, keeping the allocation
    pub fn clear(&mut self) {
        self.passes.clear();
    }

    /// Scheduled passes in execution order
    pub fn passes(&self) -> Vec<Arc<dyn RenderPass>> {
        let mut ordered = self.passes.clone();
        // stable, so insertion order survives inside a stage
        ordered.sort_by_key(|pass| pass.stage());
        ordered
    }

    /// Passes scheduled at one stage, in enqueue order
    pub fn at_stage(&self, stage: RenderPassEvent) -> impl Iterator<Item = &Arc<dyn RenderPass>> + '_ {
        self.passes.iter().filter(move |pass| pass.stage() == stage)
    }

    pub fn contains(&self, pass: &Arc<dyn RenderPass>) -> bool {
        self.passes.iter().any(|queued| same_pass(queued, pass))
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl PipelineHost for RenderQueue {
    fn enqueue(&mut self, pass: Arc<dyn RenderPass>) -> anyhow::Result<()> {
        if self.contains(&pass) {
            return Err(EnqueueError::Duplicate {
                pass: pass.name().to_string(),
                stage: pass.stage(),
            }
            .into());
        }

        log::trace!("enqueue '{}' at {}", pass.name(), pass.stage());
        self.passes.push(pass);
        Ok(())
    }
}

/// Handle identity, ignoring vtable pointers
fn same_pass(a: &Arc<dyn RenderPass>, b: &Arc<dyn RenderPass>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPass {
        name: &'static str,
        stage: RenderPassEvent,
    }

    impl RenderPass for TestPass {
        fn name(&self) -> &str {
            self.name
        }

        fn stage(&self) -> RenderPassEvent {
            self.stage
        }
    }

    fn pass(name: &'static str, stage: RenderPassEvent) -> Arc<dyn RenderPass> {
        Arc::new(TestPass { name, stage })
    }

    fn names(queue: &RenderQueue) -> Vec<String> {
        queue.passes().iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue = RenderQueue::new();
        assert!(queue.is_empty());
        assert!(queue.passes().is_empty());
    }

    #[test]
    fn test_passes_sorted_by_stage() {
        let mut queue = RenderQueue::new();
        queue.enqueue(pass("tonemap", RenderPassEvent::AfterRenderingPostProcessing)).unwrap();
        queue.enqueue(pass("shadows", RenderPassEvent::BeforeRenderingShadows)).unwrap();
        queue.enqueue(pass("aa", RenderPassEvent::BeforeRenderingPostProcessing)).unwrap();

        assert_eq!(names(&queue), vec!["shadows", "aa", "tonemap"]);
    }

    #[test]
    fn test_insertion_order_kept_within_stage() {
        let mut queue = RenderQueue::new();
        queue.enqueue(pass("first", RenderPassEvent::BeforeRenderingPostProcessing)).unwrap();
        queue.enqueue(pass("early", RenderPassEvent::BeforeRendering)).unwrap();
        queue.enqueue(pass("second", RenderPassEvent::BeforeRenderingPostProcessing)).unwrap();
        queue.enqueue(pass("third", RenderPassEvent::BeforeRenderingPostProcessing)).unwrap();

        assert_eq!(names(&queue), vec!["early", "first", "second", "third"]);

        let at_stage: Vec<&str> = queue
            .at_stage(RenderPassEvent::BeforeRenderingPostProcessing)
            .map(|p| p.name())
            .collect();
        assert_eq!(at_stage, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_handle_rejected() {
        let mut queue = RenderQueue::new();
        let aa = pass("aa", RenderPassEvent::BeforeRenderingPostProcessing);

        queue.enqueue(aa.clone()).unwrap();
        let err = queue.enqueue(aa.clone()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<EnqueueError>(),
            Some(&EnqueueError::Duplicate {
                pass: "aa".to_string(),
                stage: RenderPassEvent::BeforeRenderingPostProcessing,
            })
        );
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_equal_but_distinct_handles_accepted() {
        let mut queue = RenderQueue::new();
        queue.enqueue(pass("aa", RenderPassEvent::BeforeRenderingPostProcessing)).unwrap();
        queue.enqueue(pass("aa", RenderPassEvent::BeforeRenderingPostProcessing)).unwrap();
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_clear_allows_reenqueue() {
        let mut queue = RenderQueue::new();
        let aa = pass("aa", RenderPassEvent::BeforeRenderingPostProcessing);

        queue.enqueue(aa.clone()).unwrap();
        queue.clear();
        assert!(queue.is_empty());
        queue.enqueue(aa.clone()).unwrap();
        assert!(queue.contains(&aa));
    }

    #[test]
    fn test_duplicate_error_message() {
        let err = EnqueueError::Duplicate {
            pass: "CMAA2".to_string(),
            stage: RenderPassEvent::BeforeRenderingPostProcessing,
        };
        assert_eq!(
            err.to_string(),
            "pass 'CMAA2' already enqueued at BeforeRenderingPostProcessing this frame"
        );
    }
}
