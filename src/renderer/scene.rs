//! Draw-list generation from level state
//!
//! Each actor class is drawn either from a sprite or from primitive shapes.
//! The choice is made once, when the builder is created from the asset
//! manifest, never per frame. The builder only reads the level.

use glam::Vec2;

use super::vertex::colors;
use crate::settings::Settings;
use crate::sim::{Level, Rect};

/// Height of the finish banner sprite
const BANNER_HEIGHT: f32 = 98.0;
/// Corner radius for fallback cars
const CAR_CORNER_RADIUS: f32 = 10.0;

/// Which sprites the presentation layer managed to load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetManifest {
    pub player_sprite: bool,
    /// Number of distinct car sprites
    pub car_sprites: u8,
    pub finish_banner: bool,
    pub road_texture: bool,
}

/// How one actor class is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorStyle {
    Sprite,
    Primitive,
}

impl ActorStyle {
    fn pick(available: bool, settings: &Settings) -> Self {
        if available && settings.sprites {
            ActorStyle::Sprite
        } else {
            ActorStyle::Primitive
        }
    }
}

/// Texture handles the backend resolves to loaded images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKey {
    Player,
    Car(u8),
    FinishBanner,
    Road,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        rect: Rect,
        color: [f32; 4],
    },
    RoundedFill {
        rect: Rect,
        radius: f32,
        color: [f32; 4],
    },
    Outline {
        rect: Rect,
        thickness: f32,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Textured quad; rotation is applied before the horizontal flip
    Sprite {
        sprite: SpriteKey,
        rect: Rect,
        rotation_deg: f32,
        flip_x: bool,
    },
}

#[derive(Debug, Clone)]
pub struct SceneBuilder {
    pub player: ActorStyle,
    pub cars: ActorStyle,
    pub finish: ActorStyle,
    pub road: ActorStyle,
    car_sprites: u8,
    show_hitboxes: bool,
}

impl SceneBuilder {
    pub fn new(assets: &AssetManifest, settings: &Settings) -> Self {
        let builder = Self {
            player: ActorStyle::pick(assets.player_sprite, settings),
            cars: ActorStyle::pick(assets.car_sprites > 0, settings),
            finish: ActorStyle::pick(assets.finish_banner, settings),
            road: ActorStyle::pick(assets.road_texture, settings),
            car_sprites: assets.car_sprites,
            show_hitboxes: settings.show_hitboxes,
        };
        log::info!(
            "Scene styles: player={:?} cars={:?} finish={:?} road={:?}",
            builder.player,
            builder.cars,
            builder.finish,
            builder.road
        );
        builder
    }

    /// Everything needed to draw one frame, back to front
    pub fn build(&self, level: &Level) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        let field = level.playfield;

        out.push(DrawCommand::Fill {
            rect: field,
            color: colors::BACKGROUND,
        });
        let (top, bottom) = level.safe_zones();
        for zone in [top, bottom] {
            out.push(DrawCommand::Fill {
                rect: zone,
                color: colors::SAFE_ZONE,
            });
        }

        self.push_finish(&mut out, level);
        self.push_lanes(&mut out, level);
        self.push_player(&mut out, level);

        if self.show_hitboxes {
            self.push_hitboxes(&mut out, level);
        }
        out
    }

    fn push_finish(&self, out: &mut Vec<DrawCommand>, level: &Level) {
        let fy = level.finish_line_y();
        let w = level.playfield.w;
        match self.finish {
            ActorStyle::Sprite => out.push(DrawCommand::Sprite {
                sprite: SpriteKey::FinishBanner,
                rect: Rect::new(0.0, (fy - BANNER_HEIGHT / 2.0).max(0.0), w, BANNER_HEIGHT),
                rotation_deg: 0.0,
                flip_x: false,
            }),
            ActorStyle::Primitive => {
                // Double-line marker
                out.push(DrawCommand::Fill {
                    rect: Rect::new(0.0, fy - 2.5, w, 5.0),
                    color: colors::FINISH,
                });
                out.push(DrawCommand::Fill {
                    rect: Rect::new(0.0, fy + 5.0, w, 2.0),
                    color: colors::FINISH_SHADOW,
                });
            }
        }
    }

    fn push_lanes(&self, out: &mut Vec<DrawCommand>, level: &Level) {
        let w = level.playfield.w;
        let offset = level.background.offset();

        for (i, lane) in level.lanes().iter().enumerate() {
            let band = lane.band;
            match self.road {
                ActorStyle::Sprite => {
                    // Two tiles cover the wrap
                    for x in [-offset, w - offset] {
                        out.push(DrawCommand::Sprite {
                            sprite: SpriteKey::Road,
                            rect: Rect::new(x, band.y, w, band.h),
                            rotation_deg: 0.0,
                            flip_x: false,
                        });
                    }
                }
                ActorStyle::Primitive => out.push(DrawCommand::Fill {
                    rect: band,
                    color: if i % 2 == 0 {
                        colors::LANE_EVEN
                    } else {
                        colors::LANE_ODD
                    },
                }),
            }

            out.push(DrawCommand::Fill {
                rect: Rect::new(0.0, band.bottom() - 1.0, w, 2.0),
                color: colors::LANE_DIVIDER,
            });

            for obstacle in lane.obstacles() {
                match self.cars {
                    ActorStyle::Sprite => out.push(DrawCommand::Sprite {
                        sprite: SpriteKey::Car(obstacle.variant % self.car_sprites.max(1)),
                        rect: obstacle.rect,
                        // Car art points up; turn it to face right, mirror for left
                        rotation_deg: -90.0,
                        flip_x: obstacle.direction() < 0,
                    }),
                    ActorStyle::Primitive => {
                        let color = colors::CARS[obstacle.variant as usize % colors::CARS.len()];
                        out.push(DrawCommand::RoundedFill {
                            rect: obstacle.rect,
                            radius: CAR_CORNER_RADIUS,
                            color,
                        });
                        out.push(DrawCommand::Outline {
                            rect: obstacle.rect,
                            thickness: 2.0,
                            color: colors::OUTLINE,
                        });
                    }
                }
            }
        }
    }

    fn push_player(&self, out: &mut Vec<DrawCommand>, level: &Level) {
        let player = &level.player;
        match self.player {
            ActorStyle::Sprite => out.push(DrawCommand::Sprite {
                sprite: SpriteKey::Player,
                rect: player.footprint(),
                rotation_deg: 0.0,
                flip_x: false,
            }),
            ActorStyle::Primitive => {
                let c = player.pos;
                out.push(DrawCommand::Circle {
                    center: c,
                    radius: player.radius,
                    color: colors::OUTLINE,
                });
                out.push(DrawCommand::Circle {
                    center: c,
                    radius: player.radius - 2.0,
                    color: colors::PLAYER,
                });
                // Eyes
                for dx in [-6.0, 6.0] {
                    out.push(DrawCommand::Circle {
                        center: c + Vec2::new(dx, -5.0),
                        radius: 3.0,
                        color: colors::OUTLINE,
                    });
                }
            }
        }
    }

    fn push_hitboxes(&self, out: &mut Vec<DrawCommand>, level: &Level) {
        let outline = |rect| DrawCommand::Outline {
            rect,
            thickness: 1.0,
            color: colors::HITBOX,
        };
        for lane in level.lanes() {
            out.extend(lane.obstacles().iter().map(|o| outline(o.hitbox())));
        }
        out.push(outline(level.player.collision_rect()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::shapes::tessellate;
    use crate::sim::make_level;

    fn started_level() -> Level {
        let mut level = Level::new(make_level(1), 11);
        level.start();
        level
    }

    fn full_assets() -> AssetManifest {
        AssetManifest {
            player_sprite: true,
            car_sprites: 4,
            finish_banner: true,
            road_texture: true,
        }
    }

    fn sprites(commands: &[DrawCommand]) -> Vec<(SpriteKey, bool)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { sprite, flip_x, .. } => Some((*sprite, *flip_x)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_missing_assets_fall_back_to_primitives() {
        let builder = SceneBuilder::new(&AssetManifest::default(), &Settings::default());
        assert_eq!(builder.player, ActorStyle::Primitive);
        assert_eq!(builder.cars, ActorStyle::Primitive);
        let commands = builder.build(&started_level());
        assert!(sprites(&commands).is_empty());
        assert!(!tessellate(&commands).is_empty());
    }

    #[test]
    fn test_settings_can_disable_sprites() {
        let settings = Settings {
            sprites: false,
            ..Default::default()
        };
        let builder = SceneBuilder::new(&full_assets(), &settings);
        assert_eq!(builder.road, ActorStyle::Primitive);
        assert!(sprites(&builder.build(&started_level())).is_empty());
    }

    #[test]
    fn test_cars_face_their_direction() {
        let level = started_level();
        let builder = SceneBuilder::new(&full_assets(), &Settings::default());
        let commands = builder.build(&level);

        let cars: Vec<bool> = sprites(&commands)
            .into_iter()
            .filter_map(|(key, flip)| matches!(key, SpriteKey::Car(_)).then_some(flip))
            .collect();
        let expected: Vec<bool> = level
            .lanes()
            .iter()
            .flat_map(|l| l.obstacles().iter().map(|o| o.direction() < 0))
            .collect();
        assert_eq!(cars, expected);
        assert!(cars.contains(&true) && cars.contains(&false));
    }

    #[test]
    fn test_hitbox_overlay() {
        let level = started_level();
        let obstacles: usize = level.lanes().iter().map(|l| l.obstacles().len()).sum();
        let plain = SceneBuilder::new(&full_assets(), &Settings::default()).build(&level);
        let debug = SceneBuilder::new(
            &full_assets(),
            &Settings {
                show_hitboxes: true,
                ..Default::default()
            },
        )
        .build(&level);
        assert_eq!(debug.len(), plain.len() + obstacles + 1);
        assert_eq!(
            debug.last(),
            Some(&DrawCommand::Outline {
                rect: level.player.collision_rect(),
                thickness: 1.0,
                color: colors::HITBOX,
            })
        );
    }
}
