pub const BLAZEFACE_MODEL_NAME: &str = "blazeface_short_range.onnx";
pub const BLAZEFACE_MODEL_URL: &str =
    "https://github.com/engagemeter/engagemeter/releases/download/v0.1.0/blazeface_short_range.onnx";
