use serde::Deserialize;

/// Canonical tri-state for money movements. Every endpoint-specific status
/// representation is mapped into this enum at the boundary; aggregation code
/// never sees a raw status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

/// Raw withdrawal status as it appears on the wire. The endpoint has shipped
/// both a boolean flag and a string label over its lifetime.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawWithdrawalStatus {
    Flag(bool),
    Label(String),
}

impl PaymentStatus {
    /// Deposits report a string enum.
    pub fn from_deposit(raw: &str) -> PaymentStatus {
        match raw {
            "success" => PaymentStatus::Completed,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Pending,
        }
    }

    /// Withdrawals report either a boolean or a string. Both historical
    /// spellings of the done state ("completed" and "complated") are the same
    /// completion state.
    pub fn from_withdrawal(raw: &RawWithdrawalStatus) -> PaymentStatus {
        match raw {
            RawWithdrawalStatus::Flag(true) => PaymentStatus::Completed,
            RawWithdrawalStatus::Flag(false) => PaymentStatus::Pending,
            RawWithdrawalStatus::Label(label) => match label.as_str() {
                "completed" | "complated" => PaymentStatus::Completed,
                "failed" | "rejected" => PaymentStatus::Failed,
                _ => PaymentStatus::Pending,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_statuses() {
        assert_eq!(
            PaymentStatus::from_deposit("success"),
            PaymentStatus::Completed
        );
        assert_eq!(
            PaymentStatus::from_deposit("failed"),
            PaymentStatus::Failed
        );
        assert_eq!(
            PaymentStatus::from_deposit("pending"),
            PaymentStatus::Pending
        );
        // Unknown labels stay pending rather than erroring
        assert_eq!(
            PaymentStatus::from_deposit("in_review"),
            PaymentStatus::Pending
        );
    }

    #[test]
    fn test_withdrawal_spellings_are_equivalent() {
        let spelled = RawWithdrawalStatus::Label("completed".to_owned());
        let misspelled = RawWithdrawalStatus::Label("complated".to_owned());

        assert_eq!(
            PaymentStatus::from_withdrawal(&spelled),
            PaymentStatus::from_withdrawal(&misspelled),
        );
        assert_eq!(
            PaymentStatus::from_withdrawal(&spelled),
            PaymentStatus::Completed
        );
    }

    #[test]
    fn test_withdrawal_boolean_statuses() {
        assert_eq!(
            PaymentStatus::from_withdrawal(&RawWithdrawalStatus::Flag(true)),
            PaymentStatus::Completed
        );
        assert_eq!(
            PaymentStatus::from_withdrawal(&RawWithdrawalStatus::Flag(false)),
            PaymentStatus::Pending
        );
    }

    #[test]
    fn test_withdrawal_failure_labels() {
        for label in ["failed", "rejected"] {
            let raw = RawWithdrawalStatus::Label(label.to_owned());
            assert_eq!(
                PaymentStatus::from_withdrawal(&raw),
                PaymentStatus::Failed
            );
        }
    }
}
