//! Field storage exercised by the scenarios
//!
//! Statics are not process-wide globals here: each class's static fields live in a plain struct,
//! and one `StaticFields` is constructed per run and threaded by reference into the operations
//! that touch it. Instance fields live on a caller-owned `FieldHolder`.

/// Static fields of the class exercising `getstatic`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetstaticStatics {
    pub a: i32,
    pub b: i32,
}

impl Default for GetstaticStatics {
    fn default() -> GetstaticStatics {
        GetstaticStatics { a: 1, b: 2 }
    }
}

/// Static fields of the class exercising `putstatic` followed by `getstatic`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAccessStatics {
    pub sa: i32,
    pub sb: i32,
}

impl Default for FieldAccessStatics {
    fn default() -> FieldAccessStatics {
        FieldAccessStatics { sa: 10, sb: 20 }
    }
}

/// All static storage visible during one run
///
/// The two classes never share a field, so scenarios over different classes cannot observe each
/// other's writes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StaticFields {
    pub getstatic: GetstaticStatics,
    pub field_access: FieldAccessStatics,
}

/// Object with a single mutable instance field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHolder {
    pub field: i32,
}

impl FieldHolder {
    /// Value the field holds right after construction
    pub const INITIAL: i32 = 100;

    pub fn new() -> FieldHolder {
        FieldHolder {
            field: FieldHolder::INITIAL,
        }
    }
}

impl Default for FieldHolder {
    fn default() -> FieldHolder {
        FieldHolder::new()
    }
}

/// Value written by `static_write_then_read` into `sb`
pub const STATIC_WRITE_VALUE: i32 = 22;

/// Value written by `instance_field` into the holder
pub const INSTANCE_WRITE_VALUE: i32 = 200;

/// Read both `getstatic` statics and add them
pub fn static_get(statics: &StaticFields) -> i32 {
    let GetstaticStatics { a, b } = statics.getstatic;
    log::debug!("getstatic a = {}, getstatic b = {}", a, b);
    a.wrapping_add(b)
}

/// Overwrite `sb`, then read and add both statics
pub fn static_write_then_read(statics: &mut StaticFields) -> i32 {
    log::debug!(
        "putstatic sb = {} (was {})",
        STATIC_WRITE_VALUE,
        statics.field_access.sb
    );
    statics.field_access.sb = STATIC_WRITE_VALUE;

    let FieldAccessStatics { sa, sb } = statics.field_access;
    log::debug!("getstatic sa = {}, getstatic sb = {}", sa, sb);
    sa.wrapping_add(sb)
}

/// Overwrite the holder's field, then read it back
pub fn instance_field(holder: &mut FieldHolder) -> i32 {
    log::debug!(
        "putfield field = {} (was {})",
        INSTANCE_WRITE_VALUE,
        holder.field
    );
    holder.field = INSTANCE_WRITE_VALUE;

    let value = holder.field;
    log::debug!("getfield field = {}", value);
    value
}
