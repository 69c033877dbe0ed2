pub mod fsm;

pub use fsm::SessionFSM;
pub use fsm::SessionOutcome;
