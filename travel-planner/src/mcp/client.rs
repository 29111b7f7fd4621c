//! Client side of the stdio tool protocol.

use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::tools::{ToolDefinition, ToolResult};

use super::message::{PROTOCOL_VERSION, Request, Response};

/// Errors talking to the tool server.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to start tool server {program:?}: {source}")]
    Spawn {
        program: OsString,
        #[source]
        source: std::io::Error,
    },

    #[error("tool server I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed message from tool server: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a JSON-RPC error.
    #[error("tool server error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("tool server closed the connection")]
    Closed,

    #[error("tool server process has no {0} pipe")]
    MissingPipe(&'static str),

    #[error("not connected to the tool server")]
    NotConnected,
}

/// How to start the tool server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append `--catalog <path>` when a catalog file is given.
    pub fn with_catalog(self, catalog: Option<&Path>) -> Self {
        match catalog {
            Some(path) => self.arg("--catalog").arg(path),
            None => self,
        }
    }

    /// This executable in `tools` mode, optionally with a catalog file.
    pub fn current_exe(catalog: Option<&Path>) -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_exe()?)
            .arg("tools")
            .with_catalog(catalog))
    }
}

type BoxedReader = BufReader<Box<dyn AsyncRead + Send + Unpin>>;
type BoxedWriter = Box<dyn AsyncWrite + Send + Unpin>;

struct Connection {
    reader: BoxedReader,
    writer: BoxedWriter,
    next_id: u64,
    /// Server process, killed on drop.
    child: Option<Child>,
}

#[derive(Debug, Deserialize)]
struct ToolList {
    tools: Vec<ToolDefinition>,
}

/// A connected, initialized tool client.
///
/// Requests are sent one at a time; a response is matched to its request
/// by id and any other line is skipped.
pub struct ToolClient {
    connection: Mutex<Connection>,
    server: String,
    pid: Option<u32>,
    /// Cleared once the transport fails; never set again.
    alive: AtomicBool,
}

impl std::fmt::Debug for ToolClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolClient")
            .field("server", &self.server)
            .field("pid", &self.pid)
            .field("alive", &self.is_alive())
            .finish()
    }
}

impl ToolClient {
    /// Start the server process and perform the handshake.
    ///
    /// The process is killed when the client is dropped.
    pub async fn spawn(command: &ToolCommand) -> Result<Self, ClientError> {
        info!(program = ?command.program, args = ?command.args, "Starting tool server");

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ClientError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        let stdin = child.stdin.take().ok_or(ClientError::MissingPipe("stdin"))?;
        let stdout = child.stdout.take().ok_or(ClientError::MissingPipe("stdout"))?;

        let mut client = Self::connect(stdout, stdin).await?;
        client.pid = child.id();
        client.connection.get_mut().child = Some(child);
        Ok(client)
    }

    /// Perform the handshake over an existing pair of streams.
    pub async fn connect<R, W>(reader: R, writer: W) -> Result<Self, ClientError>
    where
        R: AsyncRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        let mut client = Self {
            connection: Mutex::new(Connection {
                reader: BufReader::new(Box::new(reader)),
                writer: Box::new(writer),
                next_id: 1,
                child: None,
            }),
            server: String::new(),
            pid: None,
            alive: AtomicBool::new(true),
        };

        let init = client
            .request(
                "initialize",
                Some(json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "clientInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION")
                    },
                    "capabilities": {}
                })),
            )
            .await?;

        client.server = init
            .pointer("/serverInfo/name")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        if let Some(version) = init
            .get("protocolVersion")
            .and_then(Value::as_str)
            .filter(|v| *v != PROTOCOL_VERSION)
        {
            warn!(version, "Tool server speaks a different protocol version");
        }

        client.notify("notifications/initialized").await?;
        info!(server = %client.server, "Connected to tool server");
        Ok(client)
    }

    /// Whether the connection is still usable.
    ///
    /// Turns false after a request fails because the server closed the
    /// connection or the pipe broke, e.g. when the server process exited.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Name the server reported during the handshake.
    pub fn server_name(&self) -> &str {
        &self.server
    }

    pub async fn list_tools(&self) -> Result<Vec<ToolDefinition>, ClientError> {
        let result = self.request("tools/list", Some(json!({}))).await?;
        let list: ToolList = serde_json::from_value(result)?;
        Ok(list.tools)
    }

    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<ToolResult, ClientError> {
        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        let result = self
            .request(
                "tools/call",
                Some(json!({ "name": name, "arguments": arguments })),
            )
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, ClientError> {
        let result = self.exchange(method, params).await;
        if matches!(result, Err(ClientError::Closed | ClientError::Io(_)))
            && self.alive.swap(false, Ordering::Relaxed)
        {
            warn!(server = %self.server, "Lost connection to tool server");
        }
        result
    }

    async fn exchange(&self, method: &str, params: Option<Value>) -> Result<Value, ClientError> {
        let mut conn = self.connection.lock().await;
        let id = conn.next_id;
        conn.next_id += 1;

        debug!(id, method, "Sending request");
        conn.send(&Request::new(id, method, params)).await?;

        let expected = Value::from(id);
        loop {
            let Some(response) = conn.receive().await? else {
                continue;
            };
            if response.id != expected {
                debug!(id = %response.id, "Skipping unrelated response");
                continue;
            }
            if let Some(error) = response.error {
                return Err(ClientError::Rpc {
                    code: error.code,
                    message: error.message,
                });
            }
            return Ok(response.result.unwrap_or(Value::Null));
        }
    }

    async fn notify(&self, method: &str) -> Result<(), ClientError> {
        self.connection
            .lock()
            .await
            .send(&Request::notification(method))
            .await
    }
}

impl Connection {
    async fn send(&mut self, request: &Request) -> Result<(), ClientError> {
        let mut line = serde_json::to_vec(request)?;
        line.push(b'\n');
        self.writer.write_all(&line).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Next response line, or `None` for a line that is not a response.
    async fn receive(&mut self) -> Result<Option<Response>, ClientError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Err(ClientError::Closed);
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            debug!("Skipping line that is not valid UTF-8");
            return Ok(None);
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<Response>(trimmed) {
            Ok(response) => Ok(Some(response)),
            Err(e) => {
                debug!(error = %e, line = trimmed, "Skipping non-response line");
                Ok(None)
            }
        }
    }
}
