/// Semantic type of a column, which dictates literal coercion and the
/// comparison each operator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Str,
    Bool,
    Time,
}

impl ColumnType {
    pub fn name(self) -> &'static str {
        match self {
            ColumnType::Int => "integer",
            ColumnType::Str => "string",
            ColumnType::Bool => "boolean",
            ColumnType::Time => "timestamp",
        }
    }
}

/// The closed set of queryable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Size,
    Path,
    Depth,
    Regular,
    Directory,
    Uid,
    Gid,
    UserName,
    GroupName,
    PermissionOwner,
    PermissionGroup,
    PermissionOther,
    AccessedAt,
    CreatedAt,
    ModifiedAt,
}

impl Column {
    /// Resolve a column name (case-insensitive). None for unknown names.
    pub fn parse(name: &str) -> Option<Column> {
        let lowered = name.to_ascii_lowercase();
        let column = match lowered.as_str() {
            "name" => Column::Name,
            "size" => Column::Size,
            "path" => Column::Path,
            "depth" => Column::Depth,
            "regular" => Column::Regular,
            "directory" => Column::Directory,
            "uid" => Column::Uid,
            "gid" => Column::Gid,
            "user_name" => Column::UserName,
            "group_name" => Column::GroupName,
            "permission_owner" => Column::PermissionOwner,
            "permission_group" => Column::PermissionGroup,
            "permission_other" => Column::PermissionOther,
            "accessed_at" => Column::AccessedAt,
            "created_at" => Column::CreatedAt,
            "modified_at" => Column::ModifiedAt,
            _ => return None,
        };
        Some(column)
    }

    pub fn name(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Size => "size",
            Column::Path => "path",
            Column::Depth => "depth",
            Column::Regular => "regular",
            Column::Directory => "directory",
            Column::Uid => "uid",
            Column::Gid => "gid",
            Column::UserName => "user_name",
            Column::GroupName => "group_name",
            Column::PermissionOwner => "permission_owner",
            Column::PermissionGroup => "permission_group",
            Column::PermissionOther => "permission_other",
            Column::AccessedAt => "accessed_at",
            Column::CreatedAt => "created_at",
            Column::ModifiedAt => "modified_at",
        }
    }

    pub fn column_type(self) -> ColumnType {
        match self {
            Column::Size | Column::Depth | Column::Uid | Column::Gid => ColumnType::Int,
            Column::Name
            | Column::Path
            | Column::UserName
            | Column::GroupName
            | Column::PermissionOwner
            | Column::PermissionGroup
            | Column::PermissionOther => ColumnType::Str,
            Column::Regular | Column::Directory => ColumnType::Bool,
            Column::AccessedAt | Column::CreatedAt | Column::ModifiedAt => ColumnType::Time,
        }
    }
}
