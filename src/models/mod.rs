pub mod class_record;

pub use class_record::{CONTENTS_DELIMITER, ClassRecord, ClassRecordForm, NewClassRecord};
