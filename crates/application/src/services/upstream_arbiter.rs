use freedns_domain::{DnsAnswer, DnsQuery, UpstreamLabel};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::ports::{AddressClassifier, UpstreamClient};

/// Chooses between the fast and the clean upstream for one question.
///
/// The fast answer is kept when it succeeded and either the question is
/// not an address query or at least one returned address is domestic.
/// Everything else goes to the clean upstream. Upstream errors never
/// escape: when both fail the result is a SERVFAIL answer.
pub struct UpstreamArbiter {
    fast: Arc<dyn UpstreamClient>,
    clean: Arc<dyn UpstreamClient>,
    classifier: Arc<dyn AddressClassifier>,
}

impl UpstreamArbiter {
    pub fn new(
        fast: Arc<dyn UpstreamClient>,
        clean: Arc<dyn UpstreamClient>,
        classifier: Arc<dyn AddressClassifier>,
    ) -> Self {
        Self {
            fast,
            clean,
            classifier,
        }
    }

    pub async fn resolve(&self, query: &DnsQuery) -> (DnsAnswer, UpstreamLabel) {
        match self.fast.query(query).await {
            Ok(answer) if self.trusts(query, &answer) => return (answer, UpstreamLabel::Fast),
            Ok(answer) => {
                debug!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    status = %answer.status,
                    "Fast answer not trusted, asking clean upstream"
                );
            }
            Err(e) => {
                debug!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    server = self.fast.address(),
                    error = %e,
                    "Fast upstream failed"
                );
            }
        }

        match self.clean.query(query).await {
            Ok(answer) => (answer, UpstreamLabel::Clean),
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    server = self.clean.address(),
                    error = %e,
                    "Clean upstream failed"
                );
                (DnsAnswer::server_failure(), UpstreamLabel::Clean)
            }
        }
    }

    fn trusts(&self, query: &DnsQuery, answer: &DnsAnswer) -> bool {
        if !answer.is_success() {
            return false;
        }
        if !query.record_type.is_address() {
            return true;
        }
        answer.addresses().any(|ip| self.classifier.is_domestic(ip))
    }
}
