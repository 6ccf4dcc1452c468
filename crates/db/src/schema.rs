use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // One entry per (day, period, grade, class); the constraint is what
    // serializes concurrent writers aiming at the same slot.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS timetable_entries (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            day VARCHAR(16) NOT NULL,
            period SMALLINT NOT NULL,
            room_number VARCHAR(8) NOT NULL,
            teacher_name VARCHAR(255) NOT NULL,
            teacher_subject VARCHAR(255) NOT NULL,
            grade SMALLINT NOT NULL,
            class_label VARCHAR(16) NOT NULL,
            is_break BOOLEAN NOT NULL DEFAULT FALSE,
            break_type VARCHAR(32) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_day CHECK (day IN ('Monday', 'Tuesday', 'Wednesday', 'Thursday', 'Friday')),
            CONSTRAINT valid_period CHECK (period BETWEEN 1 AND 7),
            CONSTRAINT valid_grade CHECK (grade BETWEEN 5 AND 11),
            CONSTRAINT valid_class CHECK (class_label IN ('Green', 'Blue')),
            CONSTRAINT valid_break_type CHECK (break_type IS NULL OR break_type IN ('Tea Break', 'Lunch Break')),
            CONSTRAINT unique_slot UNIQUE (day, period, grade, class_label)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            subject VARCHAR(255) NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classrooms (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            room_number VARCHAR(8) NOT NULL UNIQUE,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS admins (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            username VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            role VARCHAR(32) NOT NULL DEFAULT 'admin',
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            last_login TIMESTAMP WITH TIME ZONE NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS admin_sessions (
            token VARCHAR(128) PRIMARY KEY,
            admin_id UUID NOT NULL REFERENCES admins(id),
            expires_at TIMESTAMP WITH TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_timetable_entries_day ON timetable_entries(day)",
        "CREATE INDEX IF NOT EXISTS idx_timetable_entries_class ON timetable_entries(grade, class_label)",
        "CREATE INDEX IF NOT EXISTS idx_timetable_entries_room ON timetable_entries(room_number)",
        "CREATE INDEX IF NOT EXISTS idx_teachers_is_active ON teachers(is_active)",
        "CREATE INDEX IF NOT EXISTS idx_admin_sessions_admin_id ON admin_sessions(admin_id)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
