mod tests {
    use rgb_underglow::color::{Hsb, Rgb, hsb_to_rgb};
    use rgb_underglow::effect::EffectKind;
    use rgb_underglow::state::{UnderglowConfig, UnderglowState};

    const LEDS: usize = 27;

    fn state_with(effect: EffectKind) -> UnderglowState {
        let mut state = UnderglowState::from_config(&UnderglowConfig::default());
        state.current_effect = effect;
        state
    }

    fn frame() -> [Rgb; LEDS] {
        [Rgb::default(); LEDS]
    }

    #[test]
    fn test_solid_fills_with_base_color() {
        let mut state = state_with(EffectKind::Solid);
        state.color = Hsb::new(120, 100, 50);
        let mut pixels = frame();

        EffectKind::Solid.render(&mut state, &mut pixels);

        let expected = hsb_to_rgb(Hsb::new(120, 100, 50));
        assert!(pixels.iter().all(|px| *px == expected));
        assert_eq!(state.animation_step, 0);
    }

    #[test]
    fn test_breathe_peaks_at_cycle_ends() {
        let mut state = state_with(EffectKind::Breathe);
        let mut pixels = frame();

        // Step 0 renders at full brightness.
        EffectKind::Breathe.render(&mut state, &mut pixels);
        assert_eq!(pixels[0], hsb_to_rgb(state.color.with_brightness(100)));

        // The trough renders black.
        state.animation_step = 1200;
        EffectKind::Breathe.render(&mut state, &mut pixels);
        assert_eq!(pixels[0], hsb_to_rgb(state.color.with_brightness(0)));

        // Step 2400 is a peak again.
        state.animation_step = 2400;
        EffectKind::Breathe.render(&mut state, &mut pixels);
        assert_eq!(pixels[0], hsb_to_rgb(state.color.with_brightness(100)));
    }

    #[test]
    fn test_breathe_step_resets_past_cycle_end() {
        let mut state = state_with(EffectKind::Breathe);
        state.animation_speed = 3;
        state.animation_step = 2400;
        let mut pixels = frame();

        EffectKind::Breathe.render(&mut state, &mut pixels);

        // 2400 + 3 * 10 exceeds the cycle, so the phase restarts.
        assert_eq!(state.animation_step, 0);
    }

    #[test]
    fn test_breathe_advances_by_speed() {
        let mut state = state_with(EffectKind::Breathe);
        state.animation_speed = 2;
        let mut pixels = frame();

        EffectKind::Breathe.render(&mut state, &mut pixels);
        assert_eq!(state.animation_step, 20);
    }

    #[test]
    fn test_spectrum_hue_follows_step() {
        let mut state = state_with(EffectKind::Spectrum);
        state.color = Hsb::new(10, 80, 60);
        state.animation_step = 45;
        let mut pixels = frame();

        EffectKind::Spectrum.render(&mut state, &mut pixels);

        let expected = hsb_to_rgb(Hsb::new(45, 80, 60));
        assert!(pixels.iter().all(|px| *px == expected));
    }

    #[test]
    fn test_spectrum_step_stays_in_hue_range() {
        let mut state = state_with(EffectKind::Spectrum);
        state.animation_speed = 5;
        let mut pixels = frame();

        for _ in 0..1000 {
            EffectKind::Spectrum.render(&mut state, &mut pixels);
            assert!(state.animation_step < 360);
        }
    }

    #[test]
    fn test_swirl_spreads_hue_across_strip() {
        let mut state = state_with(EffectKind::Swirl);
        state.color = Hsb::new(0, 100, 100);
        state.animation_step = 30;
        let mut pixels = frame();

        EffectKind::Swirl.render(&mut state, &mut pixels);

        // 360 / 27 = 13 degrees of hue per pixel, offset by the step.
        assert_eq!(pixels[0], hsb_to_rgb(state.color.with_hue(30)));
        assert_eq!(pixels[1], hsb_to_rgb(state.color.with_hue(43)));
        assert_eq!(pixels[26], hsb_to_rgb(state.color.with_hue((13 * 26 + 30) % 360)));
    }

    #[test]
    fn test_swirl_step_stays_in_hue_range() {
        let mut state = state_with(EffectKind::Swirl);
        state.animation_speed = 5;
        let mut pixels = frame();

        for _ in 0..1000 {
            EffectKind::Swirl.render(&mut state, &mut pixels);
            assert!(state.animation_step < 360);
        }
    }

    #[test]
    fn test_custom_layout_palette() {
        let mut state = state_with(EffectKind::Custom);
        state.color = Hsb::new(77, 13, 60);
        let mut pixels = frame();

        EffectKind::Custom.render(&mut state, &mut pixels);

        // Layout tables ignore the base hue and saturation but keep the
        // configured brightness.
        let accent = hsb_to_rgb(Hsb::new(230, 100, 60));
        let base = hsb_to_rgb(Hsb::new(345, 100, 60));
        for idx in [10, 16, 20, 26] {
            assert_eq!(pixels[idx], accent);
        }
        for idx in [0, 5, 6, 9, 11, 15] {
            assert_eq!(pixels[idx], base);
        }
        assert_eq!(state.animation_step, 0);
    }

    #[test]
    fn test_custom_skips_indices_beyond_short_strips() {
        let mut state = state_with(EffectKind::Custom);
        let mut pixels = [Rgb::default(); 6];

        // Must not panic even when the strip is shorter than the layout.
        EffectKind::Custom.render(&mut state, &mut pixels);
    }

    #[test]
    fn test_cycle_order_wraps_both_ways() {
        let mut effect = EffectKind::Custom;
        for _ in 0..EffectKind::COUNT {
            effect = effect.cycled(1);
        }
        assert_eq!(effect, EffectKind::Custom);

        assert_eq!(EffectKind::Solid.cycled(-1), EffectKind::Custom);
        assert_eq!(EffectKind::Custom.cycled(-1), EffectKind::Swirl);
        assert_eq!(EffectKind::Swirl.cycled(1), EffectKind::Custom);
    }

    #[test]
    fn test_effect_raw_round_trip() {
        for raw in 0..EffectKind::COUNT {
            let effect = EffectKind::from_raw(raw).unwrap();
            assert_eq!(effect.as_raw(), raw);
        }
        assert_eq!(EffectKind::from_raw(EffectKind::COUNT), None);
    }
}
