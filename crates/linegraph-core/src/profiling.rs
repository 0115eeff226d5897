//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are compiled in unconditionally and cost a single atomic load while
//! puffin scopes are off. Enable them with [`set_scopes_on`].

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Turn puffin scope collection on or off.
#[inline]
pub fn set_scopes_on(on: bool) {
    puffin::set_scopes_on(on);
}

/// Mark the start of a new frame for profiling.
///
/// Hosts call this once per rendered frame so scrubbing and interpolation
/// scopes are grouped per frame in the viewer.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(feature = "profiling-server")]
mod server {
    use std::sync::OnceLock;

    /// Profiling backend options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ProfilingBackend {
        /// Send profiling data to puffin_viewer via HTTP.
        PuffinHttp,
    }

    /// Default address for the puffin HTTP server.
    pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8585";

    static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

    /// Initialize profiling with the specified backend.
    ///
    /// # Example
    /// ```no_run
    /// use linegraph_core::profiling::{init_profiling, ProfilingBackend};
    ///
    /// init_profiling(ProfilingBackend::PuffinHttp);
    /// ```
    pub fn init_profiling(backend: ProfilingBackend) {
        match backend {
            ProfilingBackend::PuffinHttp => {
                puffin::set_scopes_on(true);

                match puffin_http::Server::new(DEFAULT_SERVER_ADDR) {
                    Ok(server) => {
                        tracing::info!("Puffin profiler server started on http://{DEFAULT_SERVER_ADDR}");
                        let _ = PROFILING_SERVER.set(server);
                    }
                    Err(e) => {
                        tracing::error!("Failed to start puffin server: {}", e);
                    }
                }
            }
        }
    }
}

#[cfg(feature = "profiling-server")]
pub use server::{DEFAULT_SERVER_ADDR, ProfilingBackend, init_profiling};
