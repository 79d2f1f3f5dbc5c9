//! End-to-end pipeline scenarios: documents in, style records out.

use std::sync::{Arc, Mutex};

use layerstyle::{
    convert, convert_with_encoder, convert_with_log_sink, Color, ConvertOptions, Document,
    ErrorKind, LayerNode, NoRasterEncoder, PngDataUriEncoder, RasterPayload, Rect, TextPayload,
};

fn rect(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
    Rect {
        left,
        top,
        right,
        bottom,
    }
}

fn text_layer(name: &str, bounds: Rect) -> LayerNode {
    let mut layer = LayerNode::new(name, bounds);
    layer.text = Some(TextPayload {
        content: name.to_string(),
        character: Default::default(),
        paragraph: Default::default(),
        transform: None,
        bounds: None,
    });
    layer
}

fn raster_layer(name: &str, bounds: Rect) -> LayerNode {
    let mut layer = LayerNode::new(name, bounds);
    layer.raster = Some(RasterPayload {
        width: 2,
        height: 2,
        rgba: vec![128; 16],
    });
    layer
}

fn doc(children: Vec<LayerNode>) -> Document {
    Document {
        width: 1920,
        height: 1080,
        children,
    }
}

#[test]
fn text_layer_end_to_end() {
    let document = doc(vec![text_layer("title", rect(100.0, 50.0, 500.0, 120.0))]);
    let output = convert(&document, &ConvertOptions::default()).unwrap();

    assert_eq!(output.texts.len(), 1);
    assert!(output.images.is_empty());

    let record = &output.texts[0];
    assert_eq!(record.get("position"), Some("absolute"));
    assert_eq!(record.get("left"), Some("100px"));
    assert_eq!(record.get("top"), Some("50px"));
    assert_eq!(record.get("width"), Some("400px"));
    assert_eq!(record.get("height"), Some("70px"));
    assert_eq!(record.get("opacity"), None);
    assert_eq!(record.value.as_deref(), Some("title"));
}

#[test]
fn hidden_layers_follow_the_option() {
    let visible = text_layer("visible", rect(0.0, 0.0, 10.0, 10.0));
    let mut hidden = text_layer("hidden", rect(0.0, 0.0, 10.0, 10.0));
    hidden.visible = false;
    let document = doc(vec![visible, hidden]);

    let without = convert(&document, &ConvertOptions::default()).unwrap();
    assert_eq!(without.texts.len(), 1);
    assert_eq!(without.texts[0].name, "visible");

    let with = convert(
        &document,
        &ConvertOptions {
            include_hidden: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(with.texts.len(), 2);
    assert!(with.len() >= without.len());
}

#[test]
fn blend_mode_allow_list() {
    let mut multiply = raster_layer("multiply", rect(0.0, 0.0, 10.0, 10.0));
    multiply.blend_mode = Some("multiply".to_string());
    let mut unknown = raster_layer("unknown", rect(0.0, 0.0, 10.0, 10.0));
    unknown.blend_mode = Some("made-up".to_string());
    let document = doc(vec![multiply, unknown]);

    let output = convert_with_encoder(&document, &ConvertOptions::default(), &NoRasterEncoder)
        .unwrap();
    assert_eq!(output.images.len(), 2);
    assert_eq!(output.images[0].get("mix-blend-mode"), Some("multiply"));
    assert_eq!(output.images[1].get("mix-blend-mode"), None);
}

#[test]
fn failing_layer_is_logged_and_dropped() {
    let mut broken = text_layer("broken", rect(0.0, 0.0, 10.0, 10.0));
    broken.bounds.right = f64::NAN;
    let document = doc(vec![
        text_layer("first", rect(0.0, 0.0, 10.0, 10.0)),
        broken,
        text_layer("last", rect(0.0, 0.0, 10.0, 10.0)),
    ]);

    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink_store = captured.clone();
    let output = convert_with_log_sink(
        &document,
        &ConvertOptions::default(),
        &NoRasterEncoder,
        Arc::new(move |msg: &str| sink_store.lock().unwrap().push(msg.to_string())),
    )
    .unwrap();

    let names: Vec<&str> = output.texts.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["first", "last"]);

    let messages = captured.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("broken"), "got: {}", messages[0]);
}

#[test]
fn traversal_order_survives_partitioning() {
    let mut group = LayerNode::new("group", rect(0.0, 0.0, 100.0, 100.0));
    group.children = vec![
        text_layer("a", rect(0.0, 0.0, 10.0, 10.0)),
        raster_layer("b", rect(0.0, 0.0, 10.0, 10.0)),
    ];
    let document = doc(vec![
        group,
        text_layer("c", rect(0.0, 0.0, 10.0, 10.0)),
        raster_layer("d", rect(0.0, 0.0, 10.0, 10.0)),
    ]);

    let output = convert_with_encoder(&document, &ConvertOptions::default(), &NoRasterEncoder)
        .unwrap();
    let texts: Vec<&str> = output.texts.iter().map(|r| r.name.as_str()).collect();
    let images: Vec<&str> = output.images.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(texts, vec!["a", "c"]);
    assert_eq!(images, vec!["b", "d"]);
}

#[test]
fn raster_value_is_a_png_data_uri() {
    let document = doc(vec![raster_layer("photo", rect(0.0, 0.0, 2.0, 2.0))]);
    let output = convert_with_encoder(&document, &ConvertOptions::default(), &PngDataUriEncoder)
        .unwrap();
    let value = output.images[0].value.as_deref().unwrap();
    assert!(value.starts_with("data:image/png;base64,"));
}

#[test]
fn raster_capability_failure_is_not_fatal() {
    let document = doc(vec![
        raster_layer("photo", rect(0.0, 0.0, 2.0, 2.0)),
        text_layer("caption", rect(0.0, 0.0, 10.0, 10.0)),
    ]);
    let output = convert_with_encoder(&document, &ConvertOptions::default(), &NoRasterEncoder)
        .unwrap();
    assert_eq!(output.images.len(), 1);
    assert_eq!(output.images[0].value, None);
    assert_eq!(output.texts.len(), 1);
}

#[test]
fn options_from_loose_map_are_validated_up_front() {
    let options = ConvertOptions::from_value(&serde_json::json!({
        "includeHidden": true,
        "logging": false,
    }))
    .unwrap();
    assert!(options.include_hidden);

    let err = ConvertOptions::from_value(&serde_json::json!({ "logging": 1 })).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn text_fill_colors_reach_the_record() {
    let mut layer = text_layer("tinted", rect(0.0, 0.0, 10.0, 10.0));
    layer.text.as_mut().unwrap().character.fill_color = Some(Color::FloatRgb {
        r: 1.0,
        g: 0.5,
        b: 0.0,
    });
    let document = doc(vec![layer]);
    let output = convert(&document, &ConvertOptions::default()).unwrap();
    assert_eq!(output.texts[0].get("color"), Some("#ff8000"));
}

#[test]
fn output_serializes_to_camel_case_json() {
    let document = doc(vec![text_layer("title", rect(0.0, 0.0, 10.0, 10.0))]);
    let output = convert(&document, &ConvertOptions::default()).unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert!(json["texts"].is_array());
    assert!(json["images"].is_array());
    assert_eq!(json["texts"][0]["value"], "title");
    assert_eq!(json["texts"][0]["properties"]["position"], "absolute");
}
