table! {
    achievements (id) {
        id -> Uuid,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        title -> Varchar,
        description -> Varchar,
        rarity -> Int2,
        requirements -> Varchar,
        reward -> Int4,
        is_active -> Bool,
    }
}

table! {
    anti_manipulation_logs (id) {
        id -> Uuid,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        user_address -> Varchar,
        activity_type -> Int2,
        risk_score -> Int4,
        flags -> Varchar,
        is_resolved -> Bool,
        resolved_at -> Nullable<Timestamp>,
        resolved_by -> Nullable<Varchar>,
    }
}

table! {
    reputation_quests (id) {
        id -> Uuid,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        title -> Varchar,
        description -> Varchar,
        kind -> Int2,
        target_value -> Int8,
        reward -> Int4,
        is_active -> Bool,
    }
}

table! {
    sessions (id) {
        id -> Uuid,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        user_address -> Varchar,
        session_token -> Varchar,
        expires_at -> Timestamp,
        is_active -> Bool,
    }
}

table! {
    tokens (address) {
        address -> Varchar,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        creator_address -> Varchar,
        name -> Varchar,
        symbol -> Varchar,
        description -> Nullable<Varchar>,
        image_url -> Nullable<Varchar>,
        initial_price -> Numeric,
        price_increment -> Numeric,
        max_supply -> Int8,
        current_supply -> Int8,
        current_price -> Numeric,
        total_volume -> Numeric,
        total_trades -> Int4,
        market_cap -> Numeric,
        status -> Int2,
        launch_date -> Timestamp,
    }
}

table! {
    trades (id) {
        id -> Uuid,
        created_at -> Timestamp,
        user_address -> Varchar,
        token_address -> Varchar,
        kind -> Int2,
        amount -> Int8,
        price -> Numeric,
        total_value -> Numeric,
        block_number -> Nullable<Int8>,
        transaction_hash -> Nullable<Varchar>,
        risk_score -> Int4,
        is_suspicious -> Bool,
        manipulation_flags -> Nullable<Varchar>,
    }
}

table! {
    user_achievements (id) {
        id -> Uuid,
        created_at -> Timestamp,
        user_address -> Varchar,
        achievement_id -> Uuid,
        unlocked_at -> Timestamp,
    }
}

table! {
    user_reputation_quests (id) {
        id -> Uuid,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        user_address -> Varchar,
        quest_id -> Uuid,
        progress -> Int8,
        is_completed -> Bool,
        completed_at -> Nullable<Timestamp>,
    }
}

table! {
    users (wallet_address) {
        wallet_address -> Varchar,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        world_id_hash -> Nullable<Varchar>,
        verification_level -> Int2,
        reputation_score -> Int4,
        reputation_level -> Int2,
        total_trades -> Int4,
        total_volume -> Numeric,
        risk_score -> Int4,
        allocation_cap -> Numeric,
        used_allocation -> Numeric,
        market_cap -> Nullable<Numeric>,
        is_banned -> Bool,
    }
}

joinable!(anti_manipulation_logs -> users (user_address));
joinable!(tokens -> users (creator_address));
joinable!(trades -> tokens (token_address));
joinable!(trades -> users (user_address));
joinable!(user_achievements -> achievements (achievement_id));
joinable!(user_achievements -> users (user_address));
joinable!(user_reputation_quests -> reputation_quests (quest_id));
joinable!(user_reputation_quests -> users (user_address));

allow_tables_to_appear_in_same_query!(
    achievements,
    anti_manipulation_logs,
    reputation_quests,
    sessions,
    tokens,
    trades,
    user_achievements,
    user_reputation_quests,
    users,
);
