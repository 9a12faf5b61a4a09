pub const OPERATION_NAME: &str = "getWorld";

// The fixed selection for one world view. Kept in lockstep with
// `lichen_core::WorldRecord`; a field added here must be modeled there.
pub const WORLD_QUERY: &str = r#"
query getWorld($id: String!) {
    getWorld(id: $id) {
        ...WorldFields
    }
}

fragment WorldFields on World {
    id
    name
    description
    tags
    visitCount
    todayVisitCount
    bookmarkCount
    commentCount
    maxChannelCount
    maxChannelUsers
    fps
    locked
    published
    staffPicked
    ranked
    removed
    disableRealtime
    blindType
    publishedAt
    createdAt
    updatedAt
    removedAt
    blindAt
    cheer {
        total
        best
        good
        impressive
        fun
        amazing
    }
    user {
        id
        nickname
        role
        spaceAvatarThumbnail
    }
    image {
        thumbnail
    }
    primaryMapImage {
        thumbnail
    }
}
"#;
