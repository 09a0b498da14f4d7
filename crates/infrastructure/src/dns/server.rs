use super::records::{query_name_text, to_hickory_all};
use hickory_proto::op::Header;
use hickory_proto::rr::{Name, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use registry_dns_application::use_cases::ResolveRegistryQueryUseCase;
use registry_dns_domain::{AnswerSet, QueryOutcome};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Answers delegation queries from the registry and hands everything else
/// to `next`.
pub struct RegistryRequestHandler<N> {
    use_case: Arc<ResolveRegistryQueryUseCase>,
    next: N,
}

impl<N: RequestHandler> RegistryRequestHandler<N> {
    pub fn new(use_case: Arc<ResolveRegistryQueryUseCase>, next: N) -> Self {
        Self { use_case, next }
    }

    async fn send_answer<R: ResponseHandler>(
        request: &Request,
        mut response_handle: R,
        authority: &[Record],
        additional: &[Record],
    ) -> ResponseInfo {
        let builder = MessageResponseBuilder::from_message_request(request);
        let header = Header::response_from_request(request.header());
        let response = builder.build(
            header,
            std::iter::empty(),
            authority.iter(),
            std::iter::empty(),
            additional.iter(),
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send registry response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

#[async_trait::async_trait]
impl<N: RequestHandler> RequestHandler for RegistryRequestHandler<N> {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                debug!(error = %e, "No usable query, passing request on");
                return self.next.handle_request(request, response_handle).await;
            }
        };

        let qname = query_name_text(&Name::from(request_info.query.name().clone()));
        let client_ip = request.src().ip();
        info!(qname = %qname, record_type = ?request_info.query.query_type(), client = %client_ip, "DNS query received");

        let answer = match self.use_case.execute(&qname).await {
            QueryOutcome::Answered(answer) => answer,
            QueryOutcome::Declined(_) => {
                return self.next.handle_request(request, response_handle).await;
            }
        };

        match convert(&answer) {
            Ok((authority, additional)) => {
                debug!(
                    qname = %qname,
                    authority = authority.len(),
                    additional = additional.len(),
                    "Sending registry response"
                );
                Self::send_answer(request, response_handle, &authority, &additional).await
            }
            Err(e) => {
                warn!(qname = %qname, error = %e, "Registry records not encodable, passing request on");
                self.next.handle_request(request, response_handle).await
            }
        }
    }
}

fn convert(answer: &AnswerSet) -> Result<(Vec<Record>, Vec<Record>), hickory_proto::ProtoError> {
    Ok((
        to_hickory_all(&answer.authority)?,
        to_hickory_all(&answer.additional)?,
    ))
}
