pub mod multi_hop;
pub mod persona;
pub mod synthesizer;
pub mod test_set;

pub use multi_hop::{combine_concepts, generate_query_answer};
pub use persona::{match_personas, Persona, PersonaThemesMapping, ThemesPersonasInput};
pub use synthesizer::{MultiHopSynthesizer, SynthesizerConfig};
pub use test_set::{Testset, TestsetSample};
