use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Champions {
    Table,
    Id,
    Name,
    ImageUrl,
    Key,
    Roles,
}

#[derive(DeriveIden)]
enum ChampionEvaluations {
    Table,
    Id,
    ChampionId,
    PrioLane,
    Strongside,
    Weakside,
    Engage,
    Peeling,
    Split,
    Hypercarry,
    Controle,
}

#[derive(DeriveIden)]
enum Drafts {
    Table,
    Id,
    Name,
    CreatedAt,
    TeamTopChampionId,
    TeamJglChampionId,
    TeamMidChampionId,
    TeamAdcChampionId,
    TeamSupChampionId,
    EnemyTopChampionId,
    EnemyJglChampionId,
    EnemyMidChampionId,
    EnemyAdcChampionId,
    EnemySupChampionId,
    TeamBans,
    EnemyBans,
}

#[derive(DeriveIden)]
enum DraftVariants {
    Table,
    Id,
    DraftId,
    Name,
    TopChampionId,
    JglChampionId,
    MidChampionId,
    AdcChampionId,
    SupChampionId,
}

#[derive(DeriveIden)]
enum Scrims {
    Table,
    Id,
    Date,
    Opponent,
    IsWin,
    Score,
    Comments,
    NumberOfGames,
    Compositions,
    GameDrafts,
}

#[derive(DeriveIden)]
enum Players {
    Table,
    Id,
    Name,
    Role,
}

#[derive(DeriveIden)]
enum PlayerAvailability {
    Table,
    Id,
    PlayerId,
    DayOfWeek,
    IsAvailable,
}

#[derive(DeriveIden)]
enum ChampionSynergies {
    Table,
    Id,
    Champion1Id,
    Champion2Id,
    SynergyType,
    Rating,
    Notes,
}

#[derive(DeriveIden)]
enum PatchNotes {
    Table,
    Id,
    Version,
    Title,
    Content,
    Category,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Champions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Champions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Champions::Name).string().not_null())
                    .col(ColumnDef::new(Champions::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Champions::Key).string().not_null())
                    .col(
                        ColumnDef::new(Champions::Roles)
                            .json_binary()
                            .not_null()
                            .default("[]"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ChampionEvaluations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChampionEvaluations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChampionEvaluations::ChampionId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChampionEvaluations::PrioLane)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ChampionEvaluations::Strongside)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ChampionEvaluations::Weakside)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ChampionEvaluations::Engage)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ChampionEvaluations::Peeling)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ChampionEvaluations::Split)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ChampionEvaluations::Hypercarry)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ChampionEvaluations::Controle)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_champion_evaluations_champion_id")
                            .from(ChampionEvaluations::Table, ChampionEvaluations::ChampionId)
                            .to(Champions::Table, Champions::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One evaluation row per champion, also guards concurrent upserts
        manager
            .create_index(
                Index::create()
                    .name("idx_champion_evaluations_champion_id")
                    .table(ChampionEvaluations::Table)
                    .col(ChampionEvaluations::ChampionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Drafts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Drafts::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Drafts::Name).string().not_null())
                    .col(
                        ColumnDef::new(Drafts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Drafts::TeamTopChampionId).string().null())
                    .col(ColumnDef::new(Drafts::TeamJglChampionId).string().null())
                    .col(ColumnDef::new(Drafts::TeamMidChampionId).string().null())
                    .col(ColumnDef::new(Drafts::TeamAdcChampionId).string().null())
                    .col(ColumnDef::new(Drafts::TeamSupChampionId).string().null())
                    .col(ColumnDef::new(Drafts::EnemyTopChampionId).string().null())
                    .col(ColumnDef::new(Drafts::EnemyJglChampionId).string().null())
                    .col(ColumnDef::new(Drafts::EnemyMidChampionId).string().null())
                    .col(ColumnDef::new(Drafts::EnemyAdcChampionId).string().null())
                    .col(ColumnDef::new(Drafts::EnemySupChampionId).string().null())
                    .col(
                        ColumnDef::new(Drafts::TeamBans)
                            .json_binary()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(Drafts::EnemyBans)
                            .json_binary()
                            .not_null()
                            .default("[]"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DraftVariants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DraftVariants::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DraftVariants::DraftId).string().not_null())
                    .col(ColumnDef::new(DraftVariants::Name).string().not_null())
                    .col(ColumnDef::new(DraftVariants::TopChampionId).string().null())
                    .col(ColumnDef::new(DraftVariants::JglChampionId).string().null())
                    .col(ColumnDef::new(DraftVariants::MidChampionId).string().null())
                    .col(ColumnDef::new(DraftVariants::AdcChampionId).string().null())
                    .col(ColumnDef::new(DraftVariants::SupChampionId).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_draft_variants_draft_id")
                            .from(DraftVariants::Table, DraftVariants::DraftId)
                            .to(Drafts::Table, Drafts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_draft_variants_draft_id")
                    .table(DraftVariants::Table)
                    .col(DraftVariants::DraftId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Scrims::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scrims::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Scrims::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Scrims::Opponent).string().not_null())
                    .col(ColumnDef::new(Scrims::IsWin).boolean().not_null())
                    .col(ColumnDef::new(Scrims::Score).string().not_null())
                    .col(
                        ColumnDef::new(Scrims::Comments)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Scrims::NumberOfGames).integer().null())
                    .col(ColumnDef::new(Scrims::Compositions).json_binary().null())
                    .col(ColumnDef::new(Scrims::GameDrafts).json_binary().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scrims_date")
                    .table(Scrims::Table)
                    .col(Scrims::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Players::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Players::Role).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlayerAvailability::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlayerAvailability::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PlayerAvailability::PlayerId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlayerAvailability::DayOfWeek)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlayerAvailability::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_availability_player_id")
                            .from(PlayerAvailability::Table, PlayerAvailability::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Single flag per (player, weekday), also guards concurrent upserts
        manager
            .create_index(
                Index::create()
                    .name("idx_player_availability_player_day")
                    .table(PlayerAvailability::Table)
                    .col(PlayerAvailability::PlayerId)
                    .col(PlayerAvailability::DayOfWeek)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ChampionSynergies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChampionSynergies::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChampionSynergies::Champion1Id)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChampionSynergies::Champion2Id)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChampionSynergies::SynergyType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChampionSynergies::Rating)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ChampionSynergies::Notes)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_champion_synergies_champion1_id")
                            .from(ChampionSynergies::Table, ChampionSynergies::Champion1Id)
                            .to(Champions::Table, Champions::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_champion_synergies_champion2_id")
                            .from(ChampionSynergies::Table, ChampionSynergies::Champion2Id)
                            .to(Champions::Table, Champions::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PatchNotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PatchNotes::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PatchNotes::Version).string().not_null())
                    .col(ColumnDef::new(PatchNotes::Title).string().not_null())
                    .col(ColumnDef::new(PatchNotes::Content).string().not_null())
                    .col(ColumnDef::new(PatchNotes::Category).string().not_null())
                    .col(
                        ColumnDef::new(PatchNotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PatchNotes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ChampionSynergies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlayerAvailability::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scrims::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DraftVariants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Drafts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ChampionEvaluations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Champions::Table).to_owned())
            .await?;
        Ok(())
    }
}
