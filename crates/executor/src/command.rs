//! Contract commands.
//!
//! One variant per contract operation. Commands are built either directly or
//! from a host invocation (function name plus string arguments) via
//! [`Command::from_invocation`].
//!
//! | Function | Arguments |
//! |----------|-----------|
//! | `InitLedger` | none |
//! | `CreateAsset` | key, blocklist, attribute2, attribute1, webfilterlist |
//! | `ReadAsset` | key |
//! | `UpdateAsset` | key, blocklist, attribute2, attribute1, webfilterlist |
//! | `DeleteAsset` | key |
//! | `AssetExists` | key |
//! | `TransferAsset` | key, new attribute1 |
//! | `GetAllAssets` | none |

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A contract operation with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Write the seed table.
    Initialize,
    /// Create a record.
    Create {
        /// Record key (`allowlist`)
        key: String,
        /// `blocklist` field
        blocklist: String,
        /// `attribute2` field
        attribute2: i64,
        /// `attribute1` field
        attribute1: String,
        /// `webfilterlist` field
        webfilterlist: i64,
    },
    /// Read a record.
    Read {
        /// Record key
        key: String,
    },
    /// Replace a record in full.
    Update {
        /// Record key (`allowlist`)
        key: String,
        /// `blocklist` field
        blocklist: String,
        /// `attribute2` field
        attribute2: i64,
        /// `attribute1` field
        attribute1: String,
        /// `webfilterlist` field
        webfilterlist: i64,
    },
    /// Delete a record.
    Delete {
        /// Record key
        key: String,
    },
    /// Check whether a record exists.
    Exists {
        /// Record key
        key: String,
    },
    /// Replace `attribute1`, returning the previous value.
    Transfer {
        /// Record key
        key: String,
        /// New `attribute1` value
        new_attribute1: String,
    },
    /// List every record.
    GetAll,
}

impl Command {
    /// Build a command from a host invocation.
    ///
    /// # Errors
    ///
    /// - `UnknownFunction` if `function` is not a contract function
    /// - `InvalidArgument` on wrong arity or an unparseable integer
    pub fn from_invocation<A: AsRef<str>>(function: &str, args: &[A]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        match function {
            "InitLedger" => {
                expect_arity(function, &args, 0)?;
                Ok(Command::Initialize)
            }
            "CreateAsset" | "UpdateAsset" => {
                expect_arity(function, &args, 5)?;
                let key = args[0].to_string();
                let blocklist = args[1].to_string();
                let attribute2 = parse_int("attribute2", args[2])?;
                let attribute1 = args[3].to_string();
                let webfilterlist = parse_int("webfilterlist", args[4])?;
                if function == "CreateAsset" {
                    Ok(Command::Create {
                        key,
                        blocklist,
                        attribute2,
                        attribute1,
                        webfilterlist,
                    })
                } else {
                    Ok(Command::Update {
                        key,
                        blocklist,
                        attribute2,
                        attribute1,
                        webfilterlist,
                    })
                }
            }
            "ReadAsset" => {
                expect_arity(function, &args, 1)?;
                Ok(Command::Read {
                    key: args[0].to_string(),
                })
            }
            "DeleteAsset" => {
                expect_arity(function, &args, 1)?;
                Ok(Command::Delete {
                    key: args[0].to_string(),
                })
            }
            "AssetExists" => {
                expect_arity(function, &args, 1)?;
                Ok(Command::Exists {
                    key: args[0].to_string(),
                })
            }
            "TransferAsset" => {
                expect_arity(function, &args, 2)?;
                Ok(Command::Transfer {
                    key: args[0].to_string(),
                    new_attribute1: args[1].to_string(),
                })
            }
            "GetAllAssets" => {
                expect_arity(function, &args, 0)?;
                Ok(Command::GetAll)
            }
            other => Err(Error::UnknownFunction {
                name: other.to_string(),
            }),
        }
    }

    /// Host function name of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Initialize => "InitLedger",
            Command::Create { .. } => "CreateAsset",
            Command::Read { .. } => "ReadAsset",
            Command::Update { .. } => "UpdateAsset",
            Command::Delete { .. } => "DeleteAsset",
            Command::Exists { .. } => "AssetExists",
            Command::Transfer { .. } => "TransferAsset",
            Command::GetAll => "GetAllAssets",
        }
    }

    /// Whether the command only reads world state.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Command::Read { .. } | Command::Exists { .. } | Command::GetAll
        )
    }
}

fn expect_arity(function: &str, args: &[&str], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::InvalidArgument {
            reason: format!(
                "{} expects {} argument(s), got {}",
                function,
                expected,
                args.len()
            ),
        });
    }
    Ok(())
}

fn parse_int(field: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|e| Error::InvalidArgument {
        reason: format!("{} must be an integer, got {:?}: {}", field, raw, e),
    })
}
