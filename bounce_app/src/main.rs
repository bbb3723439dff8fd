//! Bouncing balls demo
//!
//! Drops a handful of circles into a bounded arena with a reflective floor
//! and runs the simulation headless for a few seconds, logging contacts and
//! final positions.

use ember2d::prelude::*;
use rand::Rng;

const ARENA_WIDTH: f32 = 200.0;
const ARENA_HEIGHT: f32 = 150.0;
const BALL_COUNT: usize = 8;
const SIM_SECONDS: f32 = 5.0;

fn build_scene() -> Scene {
    let mut scene = Scene::new(SceneConfig {
        gravity: Vec2::new(0.0, 98.0),
        fixed_dt: 1.0 / 120.0,
        ..SceneConfig::default()
    });
    scene.physics_mut().set_bounds(
        Vec2::zeros(),
        Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
        BoundaryBehavior::ReflectVelocity,
    );
    scene
}

fn spawn_ball(scene: &mut Scene, rng: &mut impl Rng) -> Option<Entity> {
    let ball = scene.spawn()?;
    let x = rng.gen_range(20.0..ARENA_WIDTH - 20.0);
    let y = rng.gen_range(10.0..40.0);

    let world = scene.world_mut();
    world
        .add_component(ball, Transform::from_position(Vec2::new(x, y)))
        .ok();
    let mut body = RigidBody::with_velocity(Vec2::new(rng.gen_range(-30.0..30.0), 0.0));
    body.set_drag(0.05);
    body.set_max_speed(400.0);
    world.add_component(ball, body).ok();
    world
        .add_component(
            ball,
            Collider::new(Shape::circle(4.0))
                .with_layers(CollisionLayers::DEBRIS, CollisionLayers::all()),
        )
        .ok();
    Some(ball)
}

fn main() {
    env_logger::init();
    log::info!("Starting bounce demo");

    let mut scene = build_scene();
    let mut rng = rand::thread_rng();

    for _ in 0..BALL_COUNT {
        if spawn_ball(&mut scene, &mut rng).is_none() {
            log::warn!("Entity cap hit while spawning balls");
            break;
        }
    }
    log::info!("Spawned {} balls", scene.world().entity_count());

    let mut timer = Timer::new();
    let mut total_contacts = 0usize;

    // Real-time loop: the scene pays wall-clock time out in fixed steps
    while timer.total_time() < SIM_SECONDS {
        timer.update();
        if scene.update(timer.delta_time()) == 0 {
            continue;
        }

        let entered = scene.collisions().entered();
        total_contacts += entered.len();
        for pair in entered {
            log::debug!("Contact between {} and {}", pair.a, pair.b);
        }
    }

    log::info!(
        "Simulated {:.1} s over {} frames ({:.0} fps average), {total_contacts} new contacts",
        timer.total_time(),
        timer.frame_count(),
        timer.average_fps()
    );
    for (entity, transform) in scene.world().query::<Transform>() {
        log::info!(
            "Ball {entity} rests at ({:.1}, {:.1})",
            transform.position.x,
            transform.position.y
        );
    }

    if let Err(err) = scene.save_snapshot("bounce_final.json") {
        log::error!("Could not save final snapshot: {err}");
    } else {
        log::info!("Final state written to bounce_final.json");
    }
}
