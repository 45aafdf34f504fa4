mod collection_vm;
mod game_vm;
mod practice_vm;

pub use collection_vm::{
    BrowserFilter, CollectionCardVm, Removed, TAG_OPTIONS, map_collection_card, remove_local,
    restore_local, visible_collections,
};
pub use game_vm::{
    QuickQuizVm, countdown_key, map_quick_quiz, match_summary, quiz_summary, slot_class, timeout_label,
};
pub use practice_vm::{
    MODE_TABS, OptionVm, PracticeVm, map_practice, option_class, verdict_label,
};
