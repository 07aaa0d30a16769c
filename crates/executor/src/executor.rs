//! Command dispatch.

use filterledger_contract::RecordContract;
use filterledger_storage::WorldState;
use tracing::debug;

use crate::{Command, Output, Result};

/// Runs commands against a contract.
///
/// The executor is stateless apart from the contract it wraps; the world
/// state is passed in per call and belongs to the host's transaction.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    contract: RecordContract,
}

impl Executor {
    /// Wrap `contract`.
    pub fn new(contract: RecordContract) -> Self {
        Self { contract }
    }

    /// The wrapped contract.
    pub fn contract(&self) -> &RecordContract {
        &self.contract
    }

    /// Execute `command` against `state`.
    pub fn execute<S>(&self, state: &mut S, command: Command) -> Result<Output>
    where
        S: WorldState + ?Sized,
    {
        debug!(target: "filterledger::executor", command = command.name(), "executing");
        let c = &self.contract;
        let output = match command {
            Command::Initialize => {
                c.initialize(state)?;
                Output::Unit
            }
            Command::Create {
                key,
                blocklist,
                attribute2,
                attribute1,
                webfilterlist,
            } => {
                c.create(state, &key, &blocklist, attribute2, &attribute1, webfilterlist)?;
                Output::Unit
            }
            Command::Read { key } => Output::Record(c.read(&*state, &key)?),
            Command::Update {
                key,
                blocklist,
                attribute2,
                attribute1,
                webfilterlist,
            } => {
                c.update(state, &key, &blocklist, attribute2, &attribute1, webfilterlist)?;
                Output::Unit
            }
            Command::Delete { key } => {
                c.delete(state, &key)?;
                Output::Unit
            }
            Command::Exists { key } => Output::Bool(c.exists(&*state, &key)?),
            Command::Transfer {
                key,
                new_attribute1,
            } => Output::Value(c.transfer(state, &key, &new_attribute1)?),
            Command::GetAll => Output::Records(c.get_all(&*state)?),
        };
        Ok(output)
    }

    /// Parse a host invocation, execute it, and render the response payload.
    pub fn invoke<S, A>(&self, state: &mut S, function: &str, args: &[A]) -> Result<Vec<u8>>
    where
        S: WorldState + ?Sized,
        A: AsRef<str>,
    {
        let command = Command::from_invocation(function, args)?;
        self.execute(state, command)?.to_payload()
    }
}
