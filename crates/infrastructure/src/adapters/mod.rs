mod in_memory;
mod json_file;
pub mod openai;
pub mod supabase;

pub use in_memory::InMemoryTodoStore;
pub use json_file::JsonFileTodoStore;
pub use openai::OpenAiTaskBreakdown;
pub use supabase::SupabaseTodoStore;
