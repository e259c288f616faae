use tracing::debug;

use crate::models::{
    AuthExtensions, AuthReversalServiceNode, AuthServiceNode, AuthServiceOptions, AuthorizationDetails, BillTo,
    BillToNode, CaptureServiceNode, Card, CardNode, CreditServiceNode, Payment, PurchaseTotalsNode, RequestMessage,
    ServiceRequest, VoidServiceNode
};

/// Translates a `ServiceRequest` into the `requestMessage` graph the processor expects.
///
/// Performs no business validation; required groups are already guaranteed by
/// the `ServiceRequest` variant.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    merchant_id: String,
    namespace: String
}

impl RequestBuilder {
    pub fn new(merchant_id: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            namespace: namespace.into()
        }
    }

    /// Builds the full message for one operation, including `merchantID` and `merchantReferenceCode`.
    pub fn build(&self, reference_code: &str, request: &ServiceRequest) -> RequestMessage {
        let mut message = RequestMessage::new(&self.namespace, &self.merchant_id, reference_code);

        match request {
            ServiceRequest::Auth(details) => self.build_auth(&mut message, details),
            ServiceRequest::Capture { auth_request_id, payment } => {
                message.cc_capture_service = Some(CaptureServiceNode::run(Some(auth_request_id.clone())));
                message.purchase_totals = Some(self.build_payment(payment));
            }
            ServiceRequest::AuthReversal { auth_request_id, payment } => {
                message.cc_auth_reversal_service = Some(AuthReversalServiceNode::run(auth_request_id.clone()));
                message.purchase_totals = Some(self.build_payment(payment));
            }
            ServiceRequest::Credit { capture_request_id, payment } => {
                message.cc_credit_service = Some(CreditServiceNode::run(capture_request_id.clone()));
                message.purchase_totals = Some(self.build_payment(payment));
            }
            ServiceRequest::Sale(details) => {
                self.build_auth(&mut message, details);
                //NOTE: No authRequestID here, the processor captures the auth from this same request
                message.cc_capture_service = Some(CaptureServiceNode::run(None));
            }
            ServiceRequest::Void { request_id } => {
                message.void_service = Some(VoidServiceNode::run(request_id.clone()));
            }
        }

        debug!("Built [{}] request for reference [{}]", request.service_type(), reference_code);

        message
    }

    fn build_auth(&self, message: &mut RequestMessage, details: &AuthorizationDetails) {
        let AuthExtensions {
            auth_service,
            encrypted_payment,
            ucaf,
            payment_network_token,
            payment_solution
        } = &details.extensions;

        let mut service = AuthServiceNode::run();

        if let Some(options) = auth_service {
            merge_auth_options(&mut service, options);
        }

        message.cc_auth_service = Some(service);
        message.purchase_totals = Some(self.build_payment(&details.payment));
        message.card = Some(self.build_card(&details.card));
        message.bill_to = Some(self.build_bill_to(&details.bill_to));
        message.encrypted_payment = encrypted_payment.clone();
        message.ucaf = ucaf.clone();
        message.payment_network_token = payment_network_token.clone();
        message.payment_solution = payment_solution.clone();
    }

    fn build_payment(&self, payment: &Payment) -> PurchaseTotalsNode {
        PurchaseTotalsNode {
            currency: payment.currency.clone(),
            grand_total_amount: payment.total
        }
    }

    fn build_card(&self, card: &Card) -> CardNode {
        let cv_number = present(&card.cv_number);

        CardNode {
            account_number: present(&card.account_number),
            expiration_month: present(&card.expiration_month),
            expiration_year: present(&card.expiration_year),
            cv_indicator: cv_number.as_ref().map(|_| 1),
            cv_number,
            card_type: present(&card.card_type)
        }
    }

    fn build_bill_to(&self, bill_to: &BillTo) -> BillToNode {
        BillToNode {
            first_name: bill_to.first_name.clone(),
            last_name: bill_to.last_name.clone(),
            street1: bill_to.street1.clone(),
            street2: present(&bill_to.street2),
            city: bill_to.city.clone(),
            state: bill_to.state.clone(),
            postal_code: bill_to.postal_code.clone(),
            country: bill_to.country.clone(),
            email: bill_to.email.clone()
        }
    }
}

fn merge_auth_options(service: &mut AuthServiceNode, options: &AuthServiceOptions) {
    let overrides = [
        (&mut service.cavv, &options.cavv),
        (&mut service.cavv_algorithm, &options.cavv_algorithm),
        (&mut service.commerce_indicator, &options.commerce_indicator),
        (&mut service.eci_raw, &options.eci_raw),
        (&mut service.xid, &options.xid),
        (&mut service.reconciliation_id, &options.reconciliation_id),
        (&mut service.auth_type, &options.auth_type),
        (&mut service.verbal_auth_code, &options.verbal_auth_code),
        (&mut service.veres_enrolled, &options.veres_enrolled),
        (&mut service.pares_status, &options.pares_status),
        (&mut service.partial_auth_indicator, &options.partial_auth_indicator),
        (&mut service.first_recurring_payment, &options.first_recurring_payment)
    ];

    for (target, value) in overrides {
        if value.is_some() {
            target.clone_from(value);
        }
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|value| !value.is_empty()).cloned()
}
