use hickory_proto::op::{Header, ResponseCode};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use registry_dns_domain::FallbackRcode;
use tracing::{debug, error};

/// End of the handler chain: every request that reaches it gets an empty
/// response with a fixed response code.
#[derive(Debug, Clone, Copy)]
pub struct FallbackHandler {
    code: ResponseCode,
}

impl FallbackHandler {
    pub fn new(rcode: FallbackRcode) -> Self {
        let code = match rcode {
            FallbackRcode::ServFail => ResponseCode::ServFail,
            FallbackRcode::Refused => ResponseCode::Refused,
            FallbackRcode::NxDomain => ResponseCode::NXDomain,
        };
        Self { code }
    }

    pub fn response_code(&self) -> ResponseCode {
        self.code
    }
}

impl Default for FallbackHandler {
    fn default() -> Self {
        Self::new(FallbackRcode::default())
    }
}

#[async_trait::async_trait]
impl RequestHandler for FallbackHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        send_error_response(request, &mut response_handle, self.code).await
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build_no_records(header);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
