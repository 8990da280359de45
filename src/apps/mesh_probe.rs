//! Mesh probe app: reports where the search mesh lives, then idles.

use std::sync::Arc;

use crate::app::{App, AppContext, AppFuture};
use crate::lifecycle::shutdown::ShutdownListener;
use crate::modules::MeshClient;
use crate::registry::AppDescriptor;

pub const ID: &str = "mesh-probe";

pub fn descriptor() -> AppDescriptor {
    AppDescriptor::new(
        ID,
        "Mesh probe",
        "Reports the search mesh endpoint until stopped",
        |ctx| {
            let mesh = ctx.require_mesh()?;
            Ok(Box::new(MeshProbe { mesh }))
        },
    )
}

struct MeshProbe {
    mesh: Arc<MeshClient>,
}

impl App for MeshProbe {
    fn run(self: Box<Self>, _ctx: AppContext, mut stop: ShutdownListener) -> AppFuture {
        Box::pin(async move {
            let endpoint = self.mesh.endpoint();
            tracing::info!(
                backend = ?self.mesh.backend(),
                endpoint = endpoint.as_deref().unwrap_or("in-process"),
                namespace = self.mesh.namespace().unwrap_or(""),
                "search mesh resolved"
            );
            stop.recv().await;
            Ok(())
        })
    }
}
