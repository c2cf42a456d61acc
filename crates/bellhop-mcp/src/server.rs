// Rust guideline compliant 2026-10-18

//! MCP server runtime for Bellhop.

use crate::types::{CallStaffInput, EmptyInput, PendingResource, ResolveInput};
use bellhop_app::{
    AppError, DeskContext, ErrorEnvelope, FiledTicket, PendingSummary, ResolveOutcome,
    SilentAlerter, TerminalBell, TicketRequest, TicketService,
};
use rmcp::handler::server::{router::tool::ToolRouter, wrapper::Parameters};
use rmcp::model::{
    AnnotateAble, CallToolResult, Content, ErrorData, Implementation, ListResourceTemplatesResult,
    ListResourcesResult, PaginatedRequestParams, ProtocolVersion, RawResource,
    RawResourceTemplate, ReadResourceRequestParams, ReadResourceResult, ResourceContents,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{tool, tool_handler, tool_router, RoleServer, ServiceExt};
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const PENDING_URI: &str = "bellhop://pending";
const TICKET_URI_PREFIX: &str = "bellhop://ticket/";

/// Runtime options for the MCP server.
#[derive(Debug, Clone)]
pub struct McpOptions {
    /// Optional desk root; defaults to the current directory.
    pub root: Option<PathBuf>,
    /// Never ring the bell, regardless of configuration.
    pub silent: bool,
    /// Logging level.
    pub log_level: String,
    /// Optional log file path.
    pub log_file: Option<PathBuf>,
}

/// MCP server errors.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// IO errors during runtime setup.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    /// The desk could not be opened.
    #[error(transparent)]
    App(#[from] AppError),
    /// Transport or server errors.
    #[error("MCP server error: {0}")]
    Transport(String),
}

/// Runs the MCP server on stdio.
///
/// The desk configuration is read once here and stays fixed for the life of
/// the process.
///
/// # Errors
///
/// Returns an error if the desk cannot be opened, the runtime cannot be
/// initialized, or the server fails.
pub fn run(options: McpOptions) -> Result<(), McpServerError> {
    let _guard = init_tracing(&options)?;

    let desk = DeskContext::open(options.root.as_deref())?;
    let service = if options.silent {
        desk.open_service(Arc::new(SilentAlerter))?
    } else {
        desk.open_service(Arc::new(TerminalBell::stderr()))?
    };
    tracing::info!(
        store = %desk.store_path().display(),
        alerts = service.settings().alert_enabled && !options.silent,
        "starting staff notification server"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let server = BellhopMcp::new(service);
        let service = server
            .serve(stdio())
            .await
            .map_err(|err| McpServerError::Transport(err.to_string()))?;
        service
            .waiting()
            .await
            .map_err(|err| McpServerError::Transport(err.to_string()))?;
        Ok(())
    })
}

fn init_tracing(options: &McpOptions) -> Result<Option<WorkerGuard>, McpServerError> {
    let level = parse_log_level(&options.log_level)?;

    // Stdout is the MCP transport; logs go to a file or stderr.
    let (writer, guard) = match &options.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(writer)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(guard)
}

fn parse_log_level(level: &str) -> Result<Level, McpServerError> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| McpServerError::InvalidLogLevel(level.to_string()))
}

#[derive(Clone)]
struct BellhopMcp {
    tool_router: ToolRouter<Self>,
    service: TicketService,
}

impl BellhopMcp {
    fn new(service: TicketService) -> Self {
        Self {
            tool_router: Self::tool_router(),
            service,
        }
    }

    fn call_staff_tool(&self, input: CallStaffInput) -> Result<FiledTicket, AppError> {
        let request = TicketRequest {
            reason: input.reason,
            guest_language: input.guest_language,
            priority: input.priority,
            location: None,
            additional_info: input.additional_info,
        };
        self.service.file_ticket(request)
    }

    fn staff_status_tool(&self) -> PendingSummary {
        self.service.list_pending()
    }

    fn resolve_tool(&self, input: ResolveInput) -> Result<ResolveOutcome, AppError> {
        if input.ticket_number.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Ticket number cannot be empty".to_string(),
            ));
        }
        self.service.resolve_ticket(input.ticket_number.trim())
    }

    fn pending_resource(&self) -> PendingResource {
        let tickets = self.service.pending_tickets();
        PendingResource {
            total: tickets.len(),
            tickets,
        }
    }
}

#[tool_router(router = tool_router)]
impl BellhopMcp {
    /// Files a staff call.
    #[tool(
        name = "call_staff",
        description = "Call hotel staff for guest assistance. Use this when a guest needs human help with check-in/check-out processing, payment issues, reservation changes, complaints or concerns, lost items, or medical emergencies. Returns a confirmation with the ticket number."
    )]
    async fn call_staff(
        &self,
        params: Parameters<CallStaffInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.call_staff_tool(params.0).map_err(map_app_error)?;
        text_result(&result)
    }

    /// Reports pending staff calls.
    #[tool(
        name = "get_staff_status",
        description = "Check if there are pending staff notifications. Returns the pending count and the most recent pending ticket numbers."
    )]
    async fn get_staff_status(
        &self,
        _params: Parameters<EmptyInput>,
    ) -> Result<CallToolResult, ErrorData> {
        text_result(&self.staff_status_tool())
    }

    /// Marks a staff call handled.
    #[tool(
        name = "resolve_staff_call",
        description = "Mark a staff call as resolved once a staff member has helped the guest."
    )]
    async fn resolve_staff_call(
        &self,
        params: Parameters<ResolveInput>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self.resolve_tool(params.0).map_err(map_app_error)?;
        text_result(&result)
    }
}

#[tool_handler(router = self.tool_router)]
impl rmcp::ServerHandler for BellhopMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "bellhop".to_string(),
                title: Some("Hotel Staff Notification".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Use call_staff whenever a guest needs a human attendant.".to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let pending = RawResource {
            uri: PENDING_URI.to_string(),
            name: "pending".to_string(),
            title: Some("Pending staff calls".to_string()),
            description: Some("Staff calls still waiting for an attendant".to_string()),
            mime_type: Some("application/json".to_string()),
            size: None,
            icons: None,
            meta: None,
        }
        .no_annotation();

        Ok(ListResourcesResult::with_all_items(vec![pending]))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        let template = RawResourceTemplate {
            uri_template: format!("{}{{ticket_number}}", TICKET_URI_PREFIX),
            name: "ticket".to_string(),
            title: Some("Staff call".to_string()),
            description: Some("Read a staff call by ticket number".to_string()),
            mime_type: Some("application/json".to_string()),
            icons: None,
        }
        .no_annotation();

        Ok(ListResourceTemplatesResult::with_all_items(vec![template]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        self.read_resource_by_uri(request.uri.as_str())
    }
}

fn text_result<T: Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let payload = serde_json::to_string(value).map_err(|err| {
        ErrorData::internal_error("Failed to serialize response", Some(err.to_string().into()))
    })?;
    Ok(CallToolResult::success(vec![Content::text(payload)]))
}

fn map_app_error(error: AppError) -> ErrorData {
    let envelope = ErrorEnvelope::from_error(&error);
    let data = serde_json::to_value(&envelope).ok();
    match envelope.code {
        bellhop_app::ErrorCode::NotFound => ErrorData::resource_not_found(envelope.message, data),
        bellhop_app::ErrorCode::InvalidTransition
        | bellhop_app::ErrorCode::ValidationError
        | bellhop_app::ErrorCode::InvalidInput => {
            ErrorData::invalid_params(envelope.message, data)
        }
        bellhop_app::ErrorCode::IoError | bellhop_app::ErrorCode::JsonError => {
            ErrorData::internal_error(envelope.message, data)
        }
    }
}

impl BellhopMcp {
    fn read_resource_by_uri(&self, uri: &str) -> Result<ReadResourceResult, ErrorData> {
        let payload = if uri == PENDING_URI {
            serde_json::to_string(&self.pending_resource())
        } else if let Some(id) = uri.strip_prefix(TICKET_URI_PREFIX) {
            let ticket = self.service.show_ticket(id).map_err(map_app_error)?;
            serde_json::to_string(&ticket)
        } else {
            return Err(ErrorData::resource_not_found(
                "Resource not found",
                Some(serde_json::json!({
                    "uri": uri,
                })),
            ));
        }
        .map_err(|err| {
            ErrorData::internal_error("Failed to serialize resource", Some(err.to_string().into()))
        })?;

        let contents = ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: Some("application/json".to_string()),
            text: payload,
            meta: None,
        };

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}
