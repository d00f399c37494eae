/// Placeholders that endpoint paths may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathParam {
    VoiceID,
}

impl PathParam {
    pub fn placeholder(self) -> &'static str {
        match self {
            PathParam::VoiceID => ":voice_id",
        }
    }
}

pub trait AndPathParam {
    fn and_param(&self, param: PathParam) -> (&'static str, &str);
}

impl AndPathParam for String {
    fn and_param(&self, param: PathParam) -> (&'static str, &str) {
        (param.placeholder(), self.as_str())
    }
}
