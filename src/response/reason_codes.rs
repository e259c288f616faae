use crate::types::ReasonCode;

/// How a reason code should be treated by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCategory {
    Success,
    /// The issuer approved but the processor declined on a merchant-configured check.
    /// The authorization still holds funds and may be reviewed, retried or reversed.
    SoftDecline,
    HardDecline,
    Error
}

const UNKNOWN_REASON: &str = "Unknown reason code.";

static REASON_CODES: &[(ReasonCode, ReasonCategory, &str)] = &[
    (100, ReasonCategory::Success, "Successful transaction."),
    (101, ReasonCategory::Error, "The request is missing one or more required fields."),
    (102, ReasonCategory::Error, "One or more fields in the request contains invalid data."),
    (104, ReasonCategory::Error, "The merchantReferenceCode sent with this authorization request matches the merchantReferenceCode of another authorization request that you sent in the last 15 minutes."),
    (110, ReasonCategory::Success, "Only a partial amount was approved."),
    (150, ReasonCategory::Error, "General system failure."),
    (151, ReasonCategory::Error, "The request was received but there was a server timeout."),
    (152, ReasonCategory::Error, "The request was received, but a service did not finish running in time."),
    (200, ReasonCategory::SoftDecline, "The authorization request was approved by the issuing bank but declined because it did not pass the Address Verification Service (AVS) check."),
    (201, ReasonCategory::HardDecline, "The issuing bank has questions about the request. You cannot receive an authorization code in the API reply, but you might receive one verbally by calling the processor."),
    (202, ReasonCategory::HardDecline, "Expired card."),
    (203, ReasonCategory::HardDecline, "General decline of the card. No other information provided by the issuing bank."),
    (204, ReasonCategory::HardDecline, "Insufficient funds in the account."),
    (205, ReasonCategory::HardDecline, "Stolen or lost card."),
    (207, ReasonCategory::Error, "Issuing bank unavailable."),
    (208, ReasonCategory::HardDecline, "Inactive card or card not authorized for card-not-present transactions."),
    (209, ReasonCategory::HardDecline, "American Express Card Identification Digits (CID) did not match."),
    (210, ReasonCategory::HardDecline, "The card has reached the credit limit."),
    (211, ReasonCategory::HardDecline, "Invalid card verification number."),
    (221, ReasonCategory::HardDecline, "The customer matched an entry on the processor's negative file."),
    (222, ReasonCategory::HardDecline, "The customer's bank account is frozen."),
    (230, ReasonCategory::SoftDecline, "The authorization request was approved by the issuing bank but declined because it did not pass the card verification number (CVN) check."),
    (231, ReasonCategory::HardDecline, "Invalid account number."),
    (232, ReasonCategory::HardDecline, "The card type is not accepted by the payment processor."),
    (233, ReasonCategory::HardDecline, "General decline by the processor."),
    (234, ReasonCategory::Error, "There is a problem with the merchant configuration."),
    (235, ReasonCategory::Error, "The requested amount exceeds the originally authorized amount."),
    (236, ReasonCategory::Error, "Processor failure."),
    (237, ReasonCategory::Error, "The authorization has already been reversed."),
    (238, ReasonCategory::Error, "The authorization has already been captured."),
    (239, ReasonCategory::Error, "The requested transaction amount must match the previous transaction amount."),
    (240, ReasonCategory::HardDecline, "The card type sent is invalid or does not correlate with the credit card number."),
    (241, ReasonCategory::Error, "The request ID is invalid."),
    (242, ReasonCategory::Error, "You requested a capture, but there is no corresponding, unused authorization record."),
    (243, ReasonCategory::Error, "The transaction has already been settled or reversed."),
    (246, ReasonCategory::Error, "The capture or credit is not voidable because it has already been submitted to the processor, or the transaction type cannot be voided."),
    (247, ReasonCategory::Error, "You requested a credit for a capture that was previously voided."),
    (250, ReasonCategory::Error, "The request was received, but there was a timeout at the payment processor."),
    (254, ReasonCategory::Error, "Stand-alone credits are not allowed."),
    (520, ReasonCategory::SoftDecline, "The authorization request was approved by the issuing bank but declined based on your Smart Authorization settings.")
];

fn lookup(code: ReasonCode) -> Option<&'static (ReasonCode, ReasonCategory, &'static str)> {
    REASON_CODES.iter().find(|(known, _, _)| *known == code)
}

/// Category of a reason code. Codes missing from the table are hard declines, never soft.
pub fn category(code: ReasonCode) -> ReasonCategory {
    lookup(code).map(|(_, category, _)| *category).unwrap_or(ReasonCategory::HardDecline)
}

pub fn description(code: ReasonCode) -> &'static str {
    lookup(code).map(|(_, _, text)| *text).unwrap_or(UNKNOWN_REASON)
}
