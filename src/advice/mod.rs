// AI improvement advice: trait-based abstraction over a hosted chat model.
//
// The AdviceService trait defines the interface. HuggingFaceAdvisor
// implements it against the HuggingFace Inference API; the prompt itself is
// a typed template in `prompt`.

pub mod huggingface;
pub mod prompt;
pub mod traits;
