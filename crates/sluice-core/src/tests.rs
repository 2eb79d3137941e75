#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::TurretCommand;
    use crate::content::*;
    use crate::enums::*;
    use crate::error::ContentError;
    use crate::events::SimEvent;
    use crate::state::SimSnapshot;
    use crate::types::*;

    /// Verify enums round-trip through serde_json.
    #[test]
    fn test_ammo_status_serde() {
        let variants = vec![AmmoStatus::NoAmmo, AmmoStatus::Insufficient, AmmoStatus::Ready];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: AmmoStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_effect_kind_serde() {
        let variants = vec![
            EffectKind::ShootSmall,
            EffectKind::ShootLiquid,
            EffectKind::SmokeSmall,
            EffectKind::SmokeLiquid,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EffectKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify TurretCommand round-trips through serde (tagged union).
    #[test]
    fn test_turret_command_serde() {
        let commands = vec![
            TurretCommand::PlaceTurret {
                definition: "wave".to_string(),
                tile_x: 3,
                tile_y: -2,
            },
            TurretCommand::RemoveTurret {
                turret: TurretId(4),
            },
            TurretCommand::OfferLiquid {
                turret: TurretId(1),
                liquid: "water".to_string(),
                amount: 2.5,
            },
            TurretCommand::OfferItem {
                turret: TurretId(2),
                item: "copper".to_string(),
            },
            TurretCommand::Aim {
                turret: TurretId(1),
                target: Position::new(10.0, 20.0),
            },
            TurretCommand::ClearAim {
                turret: TurretId(1),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: TurretCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_command_wire_format_is_tagged() {
        let json = r#"{"type":"OfferLiquid","turret":7,"liquid":"slag","amount":3.0}"#;
        let cmd: TurretCommand = serde_json::from_str(json).unwrap();
        match cmd {
            TurretCommand::OfferLiquid {
                turret,
                liquid,
                amount,
            } => {
                assert_eq!(turret, TurretId(7));
                assert_eq!(liquid, "slag");
                assert_eq!(amount, 3.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::Effect {
                kind: EffectKind::ShootLiquid,
                color: Color::rgb(0.2, 0.4, 0.8),
                position: Position::new(1.0, 2.0),
                rotation: 0.5,
            },
            SimEvent::Shake {
                turret: TurretId(0),
                intensity: 2.0,
            },
            SimEvent::Fired {
                turret: TurretId(0),
                ammo: AmmoKey::Liquid(LiquidId(1)),
            },
            SimEvent::TransferRejected {
                turret: TurretId(0),
                reason: RejectReason::NotAmmo,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: SimEvent = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = SimSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert!(back.turrets.is_empty());
    }

    // ---- Geometry ----

    #[test]
    fn test_offset_rotated() {
        let center = Position::new(8.0, 8.0);
        let muzzle = center.offset_rotated(DVec2::new(4.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!((muzzle.x - 8.0).abs() < 1e-10);
        assert!((muzzle.y - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_angle_to() {
        let origin = Position::new(0.0, 0.0);
        assert!((origin.angle_to(&Position::new(5.0, 0.0))).abs() < 1e-10);
        let up = origin.angle_to(&Position::new(0.0, 5.0));
        assert!((up - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(60);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#ff0080").unwrap();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);

        let translucent = Color::from_hex("00000080").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);

        assert!(Color::from_hex("#fff").is_none());
        assert!(Color::from_hex("#gg0000").is_none());
    }

    // ---- Content ----

    #[test]
    fn test_builtin_content_resolves() {
        let content = ContentConfig::builtin().resolve().unwrap();
        assert_eq!(content.liquids.len(), 4);
        let water = content.liquid_by_name("water").unwrap();
        assert_eq!(water.id, LiquidId(0));

        let wave = content.turret_by_name("wave").unwrap();
        assert_eq!(wave.source.kind(), AmmoSourceKind::Liquid);
        assert_eq!(wave.shoot_effect, EffectKind::ShootLiquid);

        let duo = content.turret_by_name("duo").unwrap();
        assert_eq!(duo.source.kind(), AmmoSourceKind::Item);
        assert_eq!(duo.smoke_effect, EffectKind::SmokeSmall);
    }

    #[test]
    fn test_content_json_round_trip() {
        let config = ContentConfig::builtin();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back = ContentConfig::from_json_str(&json).unwrap();
        assert_eq!(back.turrets.len(), config.turrets.len());
        assert!(back.resolve().is_ok());
    }

    #[test]
    fn test_content_defaults_apply() {
        let json = r##"{
            "liquids": [{ "name": "water", "color": "#596ab8" }],
            "turrets": [{
                "name": "hose",
                "source": { "kind": "liquid", "ammo": [{ "resource": "water", "quantity": 1.5 }] }
            }]
        }"##;
        let content = ContentConfig::from_json_str(json).unwrap().resolve().unwrap();
        let hose = content.turret_by_name("hose").unwrap();
        assert_eq!(hose.reload_ticks, crate::constants::DEFAULT_RELOAD_TICKS);
        match &hose.source {
            AmmoSourceSpec::Liquid { capacity, ammo } => {
                assert_eq!(*capacity, crate::constants::DEFAULT_LIQUID_CAPACITY);
                assert_eq!(ammo[0].quantity, 1.5);
                assert_eq!(ammo[0].stats, AmmoStats::default());
            }
            other => panic!("expected liquid source, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_liquid_rejected() {
        let json = r##"{
            "liquids": [{ "name": "water", "color": "#596ab8" }],
            "turrets": [{
                "name": "hose",
                "source": { "kind": "liquid", "ammo": [{ "resource": "oil", "quantity": 1.0 }] }
            }]
        }"##;
        let err = ContentConfig::from_json_str(json).unwrap().resolve().unwrap_err();
        assert!(matches!(err, ContentError::UnknownLiquid { ref liquid, .. } if liquid == "oil"));
    }

    #[test]
    fn test_unknown_item_rejected() {
        let json = r##"{
            "items": [{ "name": "copper" }],
            "turrets": [{
                "name": "duo",
                "source": { "kind": "item", "ammo": [{ "resource": "lead", "quantity": 1.0 }] }
            }]
        }"##;
        let err = ContentConfig::from_json_str(json).unwrap().resolve().unwrap_err();
        assert!(matches!(err, ContentError::UnknownItem { .. }));
    }

    #[test]
    fn test_duplicate_liquid_definition_rejected() {
        let mut config = ContentConfig::builtin();
        config.liquids.push(LiquidConfig {
            name: "water".to_string(),
            color: "#000000".to_string(),
        });
        let err = config.resolve().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateContent { kind: "liquid", .. }));
    }

    #[test]
    fn test_duplicate_turret_rejected() {
        let mut config = ContentConfig::builtin();
        let wave = config.turrets[0].clone();
        config.turrets.push(wave);
        let err = config.resolve().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateContent { kind: "turret", .. }));
    }

    #[test]
    fn test_invalid_quantity_rejected() {
        for quantity in [0.0, -1.0, f64::NAN] {
            let mut config = ContentConfig::builtin();
            if let AmmoSourceConfig::Liquid { ammo, .. } = &mut config.turrets[0].source {
                ammo[0].quantity = quantity;
            }
            let err = config.resolve().unwrap_err();
            assert!(matches!(err, ContentError::InvalidQuantity { .. }));
        }
    }

    #[test]
    fn test_fractional_item_rounds_rejected() {
        let mut config = ContentConfig::builtin();
        if let AmmoSourceConfig::Item { ammo, .. } = &mut config.turrets[1].source {
            ammo[0].quantity = 1.5;
        }
        let err = config.resolve().unwrap_err();
        assert!(matches!(err, ContentError::InvalidQuantity { .. }));
    }

    #[test]
    fn test_item_rounds_above_max_ammo_rejected() {
        for quantity in [31.0, 1e12] {
            let mut config = ContentConfig::builtin();
            if let AmmoSourceConfig::Item { ammo, .. } = &mut config.turrets[1].source {
                ammo[0].quantity = quantity;
            }
            let err = config.resolve().unwrap_err();
            assert!(matches!(err, ContentError::InvalidQuantity { quantity: q, .. } if q == quantity));
        }

        // A single item may fill the turret exactly.
        let mut config = ContentConfig::builtin();
        if let AmmoSourceConfig::Item { ammo, .. } = &mut config.turrets[1].source {
            ammo[0].quantity = 30.0;
        }
        assert!(config.resolve().is_ok());
    }

    #[test]
    fn test_malformed_liquid_color_rejected() {
        for color in ["blue", "#12345", "#gg0000", ""] {
            let mut config = ContentConfig::builtin();
            config.liquids[1].color = color.to_string();
            match config.resolve().unwrap_err() {
                ContentError::InvalidColor { liquid, color: bad } => {
                    assert_eq!(liquid, "slag");
                    assert_eq!(bad, color);
                }
                other => panic!("expected invalid color, got {other}"),
            }
        }
    }

    #[test]
    fn test_too_many_liquids_rejected() {
        let count = u16::MAX as usize + 2;
        let config = ContentConfig {
            liquids: (0..count)
                .map(|i| LiquidConfig {
                    name: format!("liquid-{i}"),
                    color: "#ffffff".to_string(),
                })
                .collect(),
            ..Default::default()
        };
        let err = config.resolve().unwrap_err();
        assert!(matches!(err, ContentError::TooManyContent { kind: "liquid", count: c } if c == count));
    }

    #[test]
    fn test_too_many_items_rejected() {
        let count = u16::MAX as usize + 2;
        let config = ContentConfig {
            items: (0..count)
                .map(|i| ItemConfig {
                    name: format!("item-{i}"),
                })
                .collect(),
            ..Default::default()
        };
        let err = config.resolve().unwrap_err();
        assert!(matches!(err, ContentError::TooManyContent { kind: "item", count: c } if c == count));
    }

    #[test]
    fn test_invalid_capacity_rejected() {
        let mut config = ContentConfig::builtin();
        if let AmmoSourceConfig::Liquid { capacity, .. } = &mut config.turrets[0].source {
            *capacity = 0.0;
        }
        let err = config.resolve().unwrap_err();
        assert!(matches!(err, ContentError::InvalidCapacity { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ContentConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::path::Path::new("/nonexistent/sluice/content.json");
        let err = ContentConfig::load(path).unwrap_err();
        assert!(matches!(err, ContentError::Io(_)));
    }

    #[test]
    fn test_conflict_error_message() {
        let err = ContentError::ConfigurationConflict {
            turret: "wave".to_string(),
            key: LiquidId(0).to_string(),
        };
        assert_eq!(
            err.to_string(),
            "turret \"wave\" has two conflicting ammo entries on liquid#0"
        );
    }
}
