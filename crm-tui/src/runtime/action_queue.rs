use crm_core::ClientId;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Directory mutations requested by key handlers, applied in order by the
/// event loop.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    SubmitForm,
    DeleteClient { id: ClientId },
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
