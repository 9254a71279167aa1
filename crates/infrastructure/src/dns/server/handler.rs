use crate::dns::forwarding::RecordTypeMapper;
use async_trait::async_trait;
use freedns_application::use_cases::HandleDnsQueryUseCase;
use freedns_domain::{DnsAnswer, DnsQuery, QueryTransport};
use hickory_proto::op::{Header, Message, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Protocol, Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::error;

/// hickory-server entry point: decodes the question, runs the use case and
/// writes the answer back with the request id and the upstream rcode.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// hickory-server rejects messages without exactly one question with
    /// FORMERR before they reach the handler.
    fn to_query(request: &Request) -> DnsQuery {
        let question = request.query();

        let transport = match request.protocol() {
            Protocol::Udp => QueryTransport::Datagram,
            _ => QueryTransport::Stream,
        };

        DnsQuery::new(
            question.name().to_string(),
            RecordTypeMapper::from_hickory(question.query_type()),
        )
        .with_class(RecordTypeMapper::class_from_hickory(question.query_class()))
        .with_recursion_desired(request.header().recursion_desired())
        .with_transport(transport)
    }

    async fn send_answer<R: ResponseHandler>(
        request: &Request,
        answer: &DnsAnswer,
        mut response_handle: R,
    ) -> ResponseInfo {
        // Synthesized answers carry no upstream message.
        let upstream = if answer.message.is_empty() {
            None
        } else {
            Message::from_vec(&answer.message).ok()
        };

        let empty: &[Record] = &[];
        let (answers, name_servers, additionals) = match &upstream {
            Some(message) => (message.answers(), message.name_servers(), message.additionals()),
            None => (empty, empty, empty),
        };

        let mut header = Header::response_from_request(request.header());
        header.set_recursion_available(true);
        header.set_response_code(answer.status.to_u16().into());
        if let Some(message) = &upstream {
            header.set_truncated(message.truncated());
        }

        let response = MessageResponseBuilder::from_message_request(request).build(
            header,
            answers.iter(),
            name_servers.iter(),
            std::iter::empty(),
            additionals.iter(),
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(client = %request.src(), error = %e, "Failed to send DNS response");
                Self::failure_info(request)
            }
        }
    }

    fn failure_info(request: &Request) -> ResponseInfo {
        let mut header = Header::response_from_request(request.header());
        header.set_response_code(ResponseCode::ServFail);
        header.into()
    }
}

#[async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: R,
    ) -> ResponseInfo {
        let query = Self::to_query(request);
        let (answer, _) = self.use_case.execute(&query).await;
        Self::send_answer(request, &answer, response_handle).await
    }
}
