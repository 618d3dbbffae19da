//! Batch scripts: a seed directory plus an ordered list of operations.

use serde::{Deserialize, Serialize};

use pix_hex::TransactionService;
use pix_repo::Seed;
use pix_types::{
    AppError, PixKeyRepository, RegisterTransactionRequest, Transaction, TransactionId,
    TransactionRepository, TransactionResponse,
};

/// A script file.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(flatten)]
    pub seed: Seed,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// One step of a script.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Register(RegisterTransactionRequest),
    Complete { id: TransactionId },
    Cancel { id: TransactionId, reason: String },
    Find { id: TransactionId },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Register(_) => "register",
            Operation::Complete { .. } => "complete",
            Operation::Cancel { .. } => "cancel",
            Operation::Find { .. } => "find",
        }
    }

    /// Runs this step against the service.
    pub async fn apply<T, K>(
        self,
        service: &TransactionService<T, K>,
    ) -> Result<Transaction, AppError>
    where
        T: TransactionRepository,
        K: PixKeyRepository,
    {
        match self {
            Operation::Register(req) => service.register(req).await,
            Operation::Complete { id } => service.complete(&id).await,
            Operation::Cancel { id, reason } => service.cancel(&id, &reason).await,
            Operation::Find { id } => service.find(&id).await,
        }
    }
}

/// Result line printed for each step.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Ok {
        op: &'static str,
        transaction: TransactionResponse,
    },
    Failed {
        op: &'static str,
        error: String,
    },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

/// Runs every operation in order; a failing step does not stop the script.
pub async fn run<T, K>(
    service: &TransactionService<T, K>,
    operations: Vec<Operation>,
) -> Vec<Outcome>
where
    T: TransactionRepository,
    K: PixKeyRepository,
{
    let mut outcomes = Vec::with_capacity(operations.len());

    for operation in operations {
        let op = operation.name();
        let outcome = match operation.apply(service).await {
            Ok(tx) => Outcome::Ok {
                op,
                transaction: TransactionResponse::from(&tx),
            },
            Err(e) => {
                tracing::warn!(op, error = %e, "operation failed");
                Outcome::Failed {
                    op,
                    error: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}

/// Fails when any step of a script failed.
pub fn ensure_succeeded(outcomes: &[Outcome]) -> anyhow::Result<()> {
    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} operations failed", failed, outcomes.len());
    }
    Ok(())
}
