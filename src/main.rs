use scroll_director::{
    AnimationDirector, DirectorParams, EntityHandle, GlowHandle, HingeHandle, Pose,
    RenderLoopAdapter,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct LoggingEntity;
impl EntityHandle for LoggingEntity {
    fn set_pose(&mut self, pose: &Pose) {
        info!(y = pose.position.y, yaw = pose.rotation.y, "entity pose");
    }
    fn set_visible(&mut self, node: &str, visible: bool) {
        info!(node, visible, "sub-node visibility");
    }
}

struct LoggingLid;
impl HingeHandle for LoggingLid {
    fn set_angle(&mut self, radians: f32) {
        info!(radians, "lid angle");
    }
}

struct LoggingGlow;
impl GlowHandle for LoggingGlow {
    fn set_intensity(&mut self, intensity: f32) {
        info!(intensity, "glow");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    println!("Initializing Scroll Director...");

    let params = DirectorParams {
        hidden_nodes: vec!["Cube".to_string(), "Plane".to_string()],
        ..Default::default()
    };
    let mut director = AnimationDirector::new(params)?;
    director.attach_renderer(
        RenderLoopAdapter::new()
            .with_entity(Box::new(LoggingEntity))
            .with_lid(Box::new(LoggingLid))
            .with_glow(Box::new(LoggingGlow)),
    );
    director.start();

    // Simulate one full scroll pass at 60fps over a 4000px range.
    let frames = 120;
    for frame in 0..=frames {
        let offset = 4000.0 * frame as f32 / frames as f32;
        director.handle_scroll(offset, 4000.0);
        director.on_frame(frame as f64 / 60.0);
    }

    let snapshot = director.snapshot();
    println!("Final snapshot: {}", serde_json::to_string_pretty(&snapshot)?);

    director.stop();
    Ok(())
}
