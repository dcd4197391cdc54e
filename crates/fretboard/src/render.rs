//! Turns a [`Fretboard`] into an ordered [`DrawList`].
//!
//! Primitives are emitted layer by layer, back to front: background, frets,
//! inlays, fret numbers, strings and their labels, nut, markers and barres,
//! title.

use log::{debug, info};

use fretboard_core::{
    color::Color,
    draw::{
        Circle, DrawList, FontWeight, Line, Rect, RenderLayer, StrokeCap, StrokeDefinition, Text,
        TextAnchor, TextBaseline, TextDefinition,
    },
    geometry::Point,
};

use crate::{
    error::FretboardError,
    instrument::Inlay,
    layout::Layout,
    model::{Fretboard, Marker, MarkerString},
    style::{Orientation, Style},
};

/// Renders `board` with a freshly computed layout.
pub(crate) fn render(board: &Fretboard) -> Result<DrawList, FretboardError> {
    let layout = board.layout()?;
    Ok(render_with(board, &layout))
}

pub(crate) fn render_with(board: &Fretboard, layout: &Layout) -> DrawList {
    info!(
        strings = board.string_count(),
        markers = board.markers().len(),
        frets:% = board.frets();
        "Rendering fretboard"
    );

    let mut renderer = Renderer {
        board,
        style: board.style(),
        layout,
        list: DrawList::new(),
    };
    renderer.draw_background();
    renderer.draw_frets();
    renderer.draw_inlays();
    renderer.draw_fret_labels();
    renderer.draw_strings();
    renderer.draw_nut();
    renderer.draw_markers();
    renderer.draw_title();

    debug!(primitives = renderer.list.len(); "Fretboard rendered");
    renderer.list
}

struct Renderer<'a> {
    board: &'a Fretboard,
    style: &'a Style,
    layout: &'a Layout,
    list: DrawList,
}

impl Renderer<'_> {
    fn draw_background(&mut self) {
        if let Some(color) = self.style.drawing.background_color {
            self.list.push(
                RenderLayer::Background,
                Rect::new(Point::default(), self.layout.canvas(), color),
            );
        }
    }

    fn draw_frets(&mut self) {
        let stroke = StrokeDefinition::new(self.style.fret.color, self.style.fret.size);
        let starts_at_nut = self.board.frets().starts_at_nut();
        let across = self.layout.string_axis_extent();

        for index in 0..self.layout.padded_count() {
            // Drawn by `draw_nut`.
            if index == 0 && starts_at_nut {
                continue;
            }

            let offset = self.layout.fret_line_offset(index);
            self.list.push(
                RenderLayer::Frets,
                Line::new(
                    self.layout.point(0.0, offset),
                    self.layout.point(across, offset),
                    stroke.clone(),
                ),
            );
        }
    }

    fn draw_inlays(&mut self) {
        let radius = self.style.inlays.radius;
        let color = self.style.inlays.color;
        let string_offset = match self.layout.orientation() {
            Orientation::Portrait => -4.0 * radius,
            Orientation::Landscape => self.layout.string_axis_extent() + 4.0 * radius,
        };

        for fret in self.board.frets().padded().skip(1) {
            let offset = self.layout.fret_center_offset(fret);
            let centers = match self.board.profile().inlay_at(fret) {
                Inlay::None => continue,
                Inlay::Single => vec![offset],
                Inlay::Double => vec![offset - 2.0 * radius, offset + 2.0 * radius],
            };

            for center in centers {
                self.list.push(
                    RenderLayer::Inlays,
                    Circle::new(self.layout.point(string_offset, center), radius, color),
                );
            }
        }
    }

    fn draw_fret_labels(&mut self) {
        let frets = self.board.frets();
        let font_size = self.style.drawing.font_size;
        let definition = TextDefinition::new(
            self.style.fret_label_font_family(),
            self.style.fret_label_font_size(),
        )
        .with_style(self.style.fret_label.font_style)
        .with_weight(FontWeight::Bold)
        .with_color(self.style.drawing.font_color);

        for (index, fret) in frets.padded().enumerate() {
            let labelled = if self.style.drawing.label_all_frets {
                fret > 0
            } else {
                index == 0 && !frets.starts_at_nut()
            };
            if !labelled {
                continue;
            }

            let line = self.layout.fret_line_offset(index);
            let position = match self.layout.orientation() {
                Orientation::Portrait => self.layout.point(
                    self.layout.string_axis_extent() + self.style.inlays.radius,
                    line + font_size * 0.2,
                ),
                Orientation::Landscape => Point::new(
                    self.layout.x() + line - font_size * 0.75,
                    self.layout.y() - self.style.drawing.spacing + font_size / 2.0,
                ),
            };

            self.list.push(
                RenderLayer::FretLabels,
                Text::new(fret.to_string(), position, definition.clone()),
            );
        }
    }

    fn string_width(&self, string: usize) -> f32 {
        let size = self.style.string.size;
        if self.style.string.equal_weight {
            size
        } else {
            size - (size / (self.board.string_count() as f32 * 1.5)) * string as f32
        }
    }

    fn draw_strings(&mut self) {
        let count = self.board.string_count();
        let length = self.layout.fret_axis_extent();
        let font_size = self.style.drawing.font_size;
        let label_offset = font_size / 2.0 - self.style.drawing.spacing;

        for (string, state) in self.board.strings().iter().enumerate() {
            let width = self.string_width(string);

            // Keep the outermost strings inside the nut.
            let inset = match self.layout.display_index(string) {
                0 => width / 2.0,
                index if index == count - 1 => -width / 2.0,
                _ => 0.0,
            };
            let offset = self.layout.string_offset(string) + inset;

            let color = state.color().unwrap_or(self.style.string.color);
            self.list.push(
                RenderLayer::Strings,
                Line::new(
                    self.layout.point(offset, 0.0),
                    self.layout.point(offset, length),
                    StrokeDefinition::new(color, width),
                ),
            );

            if let Some(label) = state.label() {
                let definition =
                    TextDefinition::new(&self.style.string.label_font_family, font_size)
                        .with_weight(FontWeight::Bold)
                        .with_color(state.font_color().unwrap_or(self.style.marker.color))
                        .with_anchor(TextAnchor::Middle)
                        .with_baseline(TextBaseline::Middle);

                self.list.push(
                    RenderLayer::Strings,
                    Text::new(label, self.layout.point(offset, label_offset), definition),
                );
            }
        }
    }

    fn draw_nut(&mut self) {
        if !self.board.frets().starts_at_nut() {
            return;
        }

        let offset = self.style.nut.size / 2.0;
        self.list.push(
            RenderLayer::Nut,
            Line::new(
                self.layout.point(0.0, offset),
                self.layout.point(self.layout.string_axis_extent(), offset),
                StrokeDefinition::new(self.style.nut.color, self.style.nut.size),
            ),
        );
    }

    fn marker_radius(&self) -> f32 {
        self.style
            .marker
            .radius
            .unwrap_or(self.layout.marker_radius())
    }

    fn marker_label(&self, marker: &Marker, position: Point) -> Option<Text> {
        let label = marker.label()?;
        let definition =
            TextDefinition::new(&self.style.drawing.font_family, self.style.drawing.font_size)
                .with_weight(FontWeight::Bold)
                .with_color(marker.font_color().unwrap_or(self.style.marker.font_color))
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Central);

        Some(Text::new(label, position, definition))
    }

    fn draw_markers(&mut self) {
        for marker in self.board.markers() {
            let Some(fret) = marker.fret() else {
                continue;
            };

            match marker.string() {
                MarkerString::Single(string) => self.draw_marker(marker, string, fret),
                MarkerString::Barre(from, to) => self.draw_barre(marker, from, to, fret),
            }
        }
    }

    fn draw_marker(&mut self, marker: &Marker, string: usize, fret: u32) {
        let center = self.layout.point(
            self.layout.string_offset(string),
            self.layout.fret_center_offset(fret),
        );
        let fill = marker.color().unwrap_or(self.style.marker.color);
        let border = StrokeDefinition::new(
            self.style.marker.border_color,
            self.style.marker.stroke_width,
        );

        let circle = Circle::new(center, self.marker_radius(), fill);
        let circle = if border.is_visible() {
            circle.with_stroke(border)
        } else {
            circle
        };
        self.list.push(RenderLayer::Markers, circle);
        if let Some(label) = self.marker_label(marker, center) {
            self.list.push(RenderLayer::Markers, label);
        }
    }

    fn draw_barre(&mut self, marker: &Marker, from: usize, to: usize, fret: u32) {
        let fret_offset = self.layout.fret_center_offset(fret);
        let start = self.layout.point(self.layout.string_offset(from), fret_offset);
        let end = self.layout.point(self.layout.string_offset(to), fret_offset);

        let radius = self.marker_radius();
        let fill: Color = marker.color().unwrap_or(self.style.marker.color);

        // A wider line underneath stands in for the border.
        let border = StrokeDefinition::new(
            self.style.marker.border_color,
            radius * 2.0 + self.style.marker.stroke_width * 2.0,
        )
        .with_cap(StrokeCap::Round);
        let body = StrokeDefinition::new(fill, radius * 2.0).with_cap(StrokeCap::Round);

        self.list.push(RenderLayer::Markers, Line::new(start, end, border));
        self.list.push(RenderLayer::Markers, Line::new(start, end, body));
        if let Some(label) = self.marker_label(marker, start) {
            self.list.push(RenderLayer::Markers, label);
        }
    }

    fn draw_title(&mut self) {
        let Some(title) = self.board.title() else {
            return;
        };

        let style = &self.style.title;
        let position = Point::new(
            self.layout.x() + self.layout.width() / 2.0,
            self.style.drawing.spacing + style.font_size / 2.0,
        );
        let definition = TextDefinition::new(&style.font_family, style.font_size)
            .with_weight(FontWeight::Bold)
            .with_color(style.font_color)
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Central);

        self.list.push(RenderLayer::Title, Text::new(title, position, definition));
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use fretboard_core::draw::Primitive;

    use super::*;
    use crate::{chord::Chord, instrument::Instrument, model::FretRange, style::StyleOverride};

    fn with_override(board: Fretboard, toml: &str) -> Fretboard {
        let overrides: StyleOverride = toml::from_str(toml).unwrap();
        let mut board = board;
        board.apply_style_override(&overrides).unwrap();
        board
    }

    fn circles(list: &DrawList, layer: RenderLayer) -> Vec<Circle> {
        list.in_layer(layer)
            .filter_map(|primitive| match primitive {
                Primitive::Circle(circle) => Some(circle.clone()),
                _ => None,
            })
            .collect()
    }

    fn lines(list: &DrawList, layer: RenderLayer) -> Vec<Line> {
        list.in_layer(layer)
            .filter_map(|primitive| match primitive {
                Primitive::Line(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    fn texts(list: &DrawList, layer: RenderLayer) -> Vec<Text> {
        list.in_layer(layer)
            .filter_map(|primitive| match primitive {
                Primitive::Text(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_layers_are_emitted_in_order() {
        let board = Chord::new(Instrument::Guitar, "133211", "134211")
            .unwrap()
            .with_title("F#")
            .to_fretboard()
            .unwrap();
        let board = with_override(board, "[drawing]\nbackground_color = \"white\"\n");
        let list = board.render().unwrap();

        let layers: Vec<RenderLayer> = list.iter().map(|(layer, _)| *layer).collect();
        let mut sorted = layers.clone();
        sorted.sort();
        assert_eq!(layers, sorted);
        assert_eq!(layers.first(), Some(&RenderLayer::Background));
        assert_eq!(layers.last(), Some(&RenderLayer::Title));
    }

    #[test]
    fn test_open_window_draws_nut_instead_of_first_fret() {
        let board = Fretboard::new(Instrument::Guitar);
        let list = board.render().unwrap();

        assert_eq!(list.count_in(RenderLayer::Frets), 5);
        assert_eq!(list.count_in(RenderLayer::Nut), 1);
        assert_eq!(list.count_in(RenderLayer::Strings), 6);
        assert_eq!(list.count_in(RenderLayer::FretLabels), 0);
        assert_eq!(list.count_in(RenderLayer::Background), 0);
        // Frets 3 and 5.
        assert_eq!(list.count_in(RenderLayer::Inlays), 2);
    }

    #[test]
    fn test_window_above_nut_labels_first_fret() {
        let board = Fretboard::new(Instrument::Guitar).with_frets(FretRange::new(5, 8));
        let list = board.render().unwrap();

        assert_eq!(list.count_in(RenderLayer::Frets), 5);
        assert_eq!(list.count_in(RenderLayer::Nut), 0);

        let labels = texts(&list, RenderLayer::FretLabels);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].content(), "4");
        assert_approx_eq!(f32, labels[0].position().x(), 30.0 + 210.0 + 2.0);
    }

    #[test]
    fn test_label_all_frets() {
        let board = Fretboard::new(Instrument::Guitar).with_frets(FretRange::new(5, 8));
        let board = with_override(board, "[drawing]\nlabel_all_frets = true\n");
        let list = board.render().unwrap();

        let labels: Vec<String> = texts(&list, RenderLayer::FretLabels)
            .iter()
            .map(|text| text.content().to_string())
            .collect();
        assert_eq!(labels, vec!["4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_twelfth_fret_double_inlay() {
        let board = Fretboard::new(Instrument::Ukulele).with_frets(FretRange::new(11, 13));
        let list = board.render().unwrap();
        let layout = board.layout().unwrap();

        let inlays = circles(&list, RenderLayer::Inlays);
        assert_eq!(inlays.len(), 2);
        let center = layout.y() + layout.fret_center_offset(12);
        assert_approx_eq!(f32, inlays[0].center().y(), center - 4.0);
        assert_approx_eq!(f32, inlays[1].center().y(), center + 4.0);
        assert_approx_eq!(f32, inlays[0].center().x(), layout.x() - 8.0);
    }

    #[test]
    fn test_landscape_inlays_below_grid() {
        let board = Fretboard::new(Instrument::Guitar);
        let board = with_override(board, "[drawing]\norientation = \"landscape\"\n");
        let list = board.render().unwrap();
        let layout = board.layout().unwrap();

        for inlay in circles(&list, RenderLayer::Inlays) {
            assert_approx_eq!(f32, inlay.center().y(), layout.y() + layout.height() + 8.0);
        }
    }

    #[test]
    fn test_strings_taper_and_stay_inside_the_nut() {
        let board = Fretboard::new(Instrument::Guitar);
        let list = board.render().unwrap();
        let layout = board.layout().unwrap();

        let strings = lines(&list, RenderLayer::Strings);
        assert_approx_eq!(f32, strings[0].stroke().width(), 3.0);
        assert_approx_eq!(f32, strings[5].stroke().width(), 3.0 - 3.0 / 9.0 * 5.0);
        assert_approx_eq!(f32, strings[0].start().x(), layout.x() + 1.5);
        assert_approx_eq!(
            f32,
            strings[5].start().x(),
            layout.x() + layout.width() - strings[5].stroke().width() / 2.0
        );
    }

    #[test]
    fn test_equal_weight_strings() {
        let board = with_override(
            Fretboard::new(Instrument::Bass),
            "[string]\nequal_weight = true\n",
        );
        let list = board.render().unwrap();

        assert!(
            lines(&list, RenderLayer::Strings)
                .iter()
                .all(|line| line.stroke().width() == 3.0)
        );
    }

    #[test]
    fn test_d_major_markers() {
        let board = Chord::new(Instrument::Guitar, "xx0232", "---132")
            .unwrap()
            .to_fretboard()
            .unwrap();
        let list = board.render().unwrap();

        let markers = circles(&list, RenderLayer::Markers);
        assert_eq!(markers.len(), 3);
        // String 3 at fret 2: x = 30 + 3 * 48, y = 30 + 10 + 2 * 80 - 40.
        assert_approx_eq!(f32, markers[0].center().x(), 174.0);
        assert_approx_eq!(f32, markers[0].center().y(), 160.0);
        assert_approx_eq!(f32, markers[0].radius(), 14.4);

        let string_labels: Vec<String> = texts(&list, RenderLayer::Strings)
            .iter()
            .map(|text| text.content().to_string())
            .collect();
        assert_eq!(string_labels, vec!["X", "X", "O"]);
    }

    #[test]
    fn test_barre_is_border_line_under_fill_line() {
        let board = Chord::new(Instrument::Guitar, "133211", "134211")
            .unwrap()
            .to_fretboard()
            .unwrap();
        let list = board.render().unwrap();
        let layout = board.layout().unwrap();

        let barre = lines(&list, RenderLayer::Markers);
        assert_eq!(barre.len(), 2);
        let radius = layout.marker_radius();
        assert_approx_eq!(f32, barre[0].stroke().width(), radius * 2.0 + 4.0);
        assert_approx_eq!(f32, barre[1].stroke().width(), radius * 2.0);
        assert_eq!(barre[1].stroke().cap(), StrokeCap::Round);
        assert_approx_eq!(f32, barre[0].start().x(), layout.x());
        assert_approx_eq!(f32, barre[0].end().x(), layout.x() + layout.width());

        assert_eq!(circles(&list, RenderLayer::Markers).len(), 3);
        let labels = texts(&list, RenderLayer::Markers);
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0].content(), "1");
        assert_eq!(labels[0].position(), barre[0].start());
    }

    #[test]
    fn test_landscape_marker_uses_reversed_string_axis() {
        let mut board = Fretboard::new(Instrument::Guitar);
        board.add_marker(Marker::new(0, 1)).unwrap();
        let board = with_override(board, "[drawing]\norientation = \"landscape\"\n");

        let list = board.render().unwrap();
        let layout = board.layout().unwrap();
        let marker = &circles(&list, RenderLayer::Markers)[0];

        assert_approx_eq!(f32, marker.center().y(), layout.y() + layout.height());
        assert_approx_eq!(
            f32,
            marker.center().x(),
            layout.x() + layout.fret_center_offset(1)
        );
    }

    #[test]
    fn test_marker_without_fret_is_skipped() {
        let mut board = Fretboard::new(Instrument::Guitar);
        board
            .add_marker(Marker::at(MarkerString::Single(2), None))
            .unwrap();

        assert_eq!(board.render().unwrap().count_in(RenderLayer::Markers), 0);
    }

    #[test]
    fn test_marker_style_radius_override() {
        let mut board = Fretboard::new(Instrument::Guitar);
        board.add_marker(Marker::new(2, 2).with_label("R")).unwrap();
        let board = with_override(board, "[marker]\nradius = 9\n");

        let list = board.render().unwrap();
        assert_approx_eq!(f32, circles(&list, RenderLayer::Markers)[0].radius(), 9.0);
    }

    #[test]
    fn test_title_is_centered_above_grid() {
        let board = Fretboard::new(Instrument::Guitar).with_title("E shape");
        let list = board.render().unwrap();

        let title = &texts(&list, RenderLayer::Title)[0];
        assert_eq!(title.content(), "E shape");
        assert_approx_eq!(f32, title.position().x(), 150.0);
        assert_approx_eq!(f32, title.position().y(), 45.0);
    }

    #[test]
    fn test_background_covers_canvas() {
        let board = with_override(
            Fretboard::new(Instrument::Guitar),
            "[drawing]\nbackground_color = \"ivory\"\norientation = \"landscape\"\n",
        );
        let list = board.render().unwrap();

        let background = list.in_layer(RenderLayer::Background).next();
        match background {
            Some(Primitive::Rect(rect)) => {
                assert_approx_eq!(f32, rect.size().width(), 400.0);
                assert_approx_eq!(f32, rect.size().height(), 300.0);
            }
            other => panic!("expected a background rect, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_string_color_and_label_color() {
        let mut board = Fretboard::new(Instrument::Guitar);
        let gold = Color::new("gold").unwrap();
        board.set_string_color(1, gold).unwrap();
        board.add_string_label(1, "A", None).unwrap();

        let list = board.render().unwrap();
        let strings = lines(&list, RenderLayer::Strings);
        assert_eq!(strings[1].stroke().color(), gold);

        let label = &texts(&list, RenderLayer::Strings)[0];
        assert_eq!(label.definition().color(), board.style().marker.color);
    }
}
