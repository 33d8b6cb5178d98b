use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    Role,
    XpPoints,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AccessTokens {
    Table,
    Id,
    UserId,
    AccessToken,
}

#[derive(DeriveIden)]
enum TrainingAreas {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Modules {
    Table,
    Id,
    TrainingAreaId,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    ModuleId,
    Name,
    Description,
    CourseType,
    Position,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Units {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum CourseUnits {
    Table,
    CourseId,
    UnitId,
    Position,
}

#[derive(DeriveIden)]
enum LearningBlocks {
    Table,
    Id,
    UnitId,
    Kind,
    Title,
    Position,
    XpPoints,
}

#[derive(DeriveIden)]
enum BlockCompletions {
    Table,
    UserId,
    BlockId,
    Completed,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Assessments {
    Table,
    Id,
    UnitId,
    CourseId,
    Title,
    PassingScore,
    XpPoints,
    MaxRetakes,
}

#[derive(DeriveIden)]
enum AssessmentAttempts {
    Table,
    Id,
    UserId,
    AssessmentId,
    Score,
    Passed,
    Answers,
    CompletedAt,
}

#[derive(DeriveIden)]
enum UserProgress {
    Table,
    UserId,
    CourseId,
    PercentComplete,
    Completed,
    LastAccessed,
}

#[derive(DeriveIden)]
enum Badges {
    Table,
    Id,
    Name,
    Description,
    Kind,
    XpPoints,
    Active,
}

#[derive(DeriveIden)]
enum UserBadges {
    Table,
    UserId,
    BadgeId,
    EarnedAt,
}

#[derive(DeriveIden)]
enum Certificates {
    Table,
    Id,
    UserId,
    CourseId,
    CertificateNumber,
    IssuedAt,
}

#[derive(DeriveIden)]
enum MandatoryCourses {
    Table,
    CourseId,
    Role,
}

fn cascade_fk<T, U>(from_tbl: T, from_col: U, to_tbl: impl IntoTableRef, to_col: impl IntoIden) -> ForeignKeyCreateStatement
where
    T: IntoTableRef,
    U: IntoIden,
{
    ForeignKey::create()
        .from_tbl(from_tbl)
        .from_col(from_col)
        .to_tbl(to_tbl)
        .to_col(to_col)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Role).string_len(32).not_null())
                    .col(ColumnDef::new(Users::XpPoints).integer().not_null().default(0))
                    .col(ColumnDef::new(Users::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AccessTokens::Table)
                    .col(
                        ColumnDef::new(AccessTokens::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccessTokens::UserId).uuid().not_null())
                    .col(ColumnDef::new(AccessTokens::AccessToken).string().not_null().unique_key())
                    .foreign_key(&mut cascade_fk(
                        AccessTokens::Table,
                        AccessTokens::UserId,
                        Users::Table,
                        Users::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainingAreas::Table)
                    .col(
                        ColumnDef::new(TrainingAreas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrainingAreas::Name).string().not_null())
                    .col(ColumnDef::new(TrainingAreas::Description).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Modules::Table)
                    .col(
                        ColumnDef::new(Modules::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Modules::TrainingAreaId).integer().not_null())
                    .col(ColumnDef::new(Modules::Name).string().not_null())
                    .col(ColumnDef::new(Modules::Description).string())
                    .foreign_key(&mut cascade_fk(
                        Modules::Table,
                        Modules::TrainingAreaId,
                        TrainingAreas::Table,
                        TrainingAreas::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .col(
                        ColumnDef::new(Courses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::ModuleId).integer().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Description).string())
                    .col(ColumnDef::new(Courses::CourseType).string_len(32).not_null())
                    .col(ColumnDef::new(Courses::Position).integer().not_null().default(0))
                    .col(ColumnDef::new(Courses::CreatedAt).date_time().not_null())
                    .foreign_key(&mut cascade_fk(
                        Courses::Table,
                        Courses::ModuleId,
                        Modules::Table,
                        Modules::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Units::Table)
                    .col(
                        ColumnDef::new(Units::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Units::Name).string().not_null())
                    .col(ColumnDef::new(Units::Description).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseUnits::Table)
                    .col(ColumnDef::new(CourseUnits::CourseId).integer().not_null())
                    .col(ColumnDef::new(CourseUnits::UnitId).integer().not_null())
                    .col(ColumnDef::new(CourseUnits::Position).integer().not_null())
                    .primary_key(Index::create().col(CourseUnits::CourseId).col(CourseUnits::UnitId))
                    .foreign_key(&mut cascade_fk(
                        CourseUnits::Table,
                        CourseUnits::CourseId,
                        Courses::Table,
                        Courses::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        CourseUnits::Table,
                        CourseUnits::UnitId,
                        Units::Table,
                        Units::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LearningBlocks::Table)
                    .col(
                        ColumnDef::new(LearningBlocks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LearningBlocks::UnitId).integer().not_null())
                    .col(ColumnDef::new(LearningBlocks::Kind).string_len(32).not_null())
                    .col(ColumnDef::new(LearningBlocks::Title).string().not_null())
                    .col(ColumnDef::new(LearningBlocks::Position).integer().not_null())
                    .col(ColumnDef::new(LearningBlocks::XpPoints).integer().not_null().default(0))
                    .foreign_key(&mut cascade_fk(
                        LearningBlocks::Table,
                        LearningBlocks::UnitId,
                        Units::Table,
                        Units::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlockCompletions::Table)
                    .col(ColumnDef::new(BlockCompletions::UserId).uuid().not_null())
                    .col(ColumnDef::new(BlockCompletions::BlockId).integer().not_null())
                    .col(ColumnDef::new(BlockCompletions::Completed).boolean().not_null())
                    .col(ColumnDef::new(BlockCompletions::CreatedAt).date_time().not_null())
                    .primary_key(
                        Index::create()
                            .col(BlockCompletions::UserId)
                            .col(BlockCompletions::BlockId),
                    )
                    .foreign_key(&mut cascade_fk(
                        BlockCompletions::Table,
                        BlockCompletions::UserId,
                        Users::Table,
                        Users::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        BlockCompletions::Table,
                        BlockCompletions::BlockId,
                        LearningBlocks::Table,
                        LearningBlocks::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Assessments::Table)
                    .col(
                        ColumnDef::new(Assessments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assessments::UnitId).integer())
                    .col(ColumnDef::new(Assessments::CourseId).integer())
                    .col(ColumnDef::new(Assessments::Title).string().not_null())
                    .col(ColumnDef::new(Assessments::PassingScore).integer().not_null())
                    .col(ColumnDef::new(Assessments::XpPoints).integer().not_null().default(0))
                    .col(ColumnDef::new(Assessments::MaxRetakes).integer().not_null().default(3))
                    .foreign_key(&mut cascade_fk(
                        Assessments::Table,
                        Assessments::UnitId,
                        Units::Table,
                        Units::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        Assessments::Table,
                        Assessments::CourseId,
                        Courses::Table,
                        Courses::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AssessmentAttempts::Table)
                    .col(ColumnDef::new(AssessmentAttempts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(AssessmentAttempts::UserId).uuid().not_null())
                    .col(ColumnDef::new(AssessmentAttempts::AssessmentId).integer().not_null())
                    .col(ColumnDef::new(AssessmentAttempts::Score).integer().not_null())
                    .col(ColumnDef::new(AssessmentAttempts::Passed).boolean().not_null())
                    .col(ColumnDef::new(AssessmentAttempts::Answers).json().not_null())
                    .col(ColumnDef::new(AssessmentAttempts::CompletedAt).date_time().not_null())
                    .foreign_key(&mut cascade_fk(
                        AssessmentAttempts::Table,
                        AssessmentAttempts::UserId,
                        Users::Table,
                        Users::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        AssessmentAttempts::Table,
                        AssessmentAttempts::AssessmentId,
                        Assessments::Table,
                        Assessments::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attempts_user_assessment")
                    .table(AssessmentAttempts::Table)
                    .col(AssessmentAttempts::UserId)
                    .col(AssessmentAttempts::AssessmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserProgress::Table)
                    .col(ColumnDef::new(UserProgress::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserProgress::CourseId).integer().not_null())
                    .col(ColumnDef::new(UserProgress::PercentComplete).integer().not_null())
                    .col(ColumnDef::new(UserProgress::Completed).boolean().not_null())
                    .col(ColumnDef::new(UserProgress::LastAccessed).date_time().not_null())
                    .primary_key(Index::create().col(UserProgress::UserId).col(UserProgress::CourseId))
                    .foreign_key(&mut cascade_fk(
                        UserProgress::Table,
                        UserProgress::UserId,
                        Users::Table,
                        Users::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        UserProgress::Table,
                        UserProgress::CourseId,
                        Courses::Table,
                        Courses::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Badges::Table)
                    .col(
                        ColumnDef::new(Badges::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Badges::Name).string().not_null())
                    .col(ColumnDef::new(Badges::Description).string())
                    .col(ColumnDef::new(Badges::Kind).string_len(32).not_null())
                    .col(ColumnDef::new(Badges::XpPoints).integer().not_null().default(0))
                    .col(ColumnDef::new(Badges::Active).boolean().not_null().default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserBadges::Table)
                    .col(ColumnDef::new(UserBadges::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserBadges::BadgeId).integer().not_null())
                    .col(ColumnDef::new(UserBadges::EarnedAt).date_time().not_null())
                    .primary_key(Index::create().col(UserBadges::UserId).col(UserBadges::BadgeId))
                    .foreign_key(&mut cascade_fk(
                        UserBadges::Table,
                        UserBadges::UserId,
                        Users::Table,
                        Users::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        UserBadges::Table,
                        UserBadges::BadgeId,
                        Badges::Table,
                        Badges::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .col(ColumnDef::new(Certificates::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Certificates::UserId).uuid().not_null())
                    .col(ColumnDef::new(Certificates::CourseId).integer().not_null())
                    .col(
                        ColumnDef::new(Certificates::CertificateNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Certificates::IssuedAt).date_time().not_null())
                    .foreign_key(&mut cascade_fk(
                        Certificates::Table,
                        Certificates::UserId,
                        Users::Table,
                        Users::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        Certificates::Table,
                        Certificates::CourseId,
                        Courses::Table,
                        Courses::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        // The backstop for idempotent certificate generation.
        manager
            .create_index(
                Index::create()
                    .name("idx_certificates_user_course")
                    .table(Certificates::Table)
                    .col(Certificates::UserId)
                    .col(Certificates::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MandatoryCourses::Table)
                    .col(ColumnDef::new(MandatoryCourses::CourseId).integer().not_null())
                    .col(ColumnDef::new(MandatoryCourses::Role).string_len(32).not_null())
                    .primary_key(
                        Index::create()
                            .col(MandatoryCourses::CourseId)
                            .col(MandatoryCourses::Role),
                    )
                    .foreign_key(&mut cascade_fk(
                        MandatoryCourses::Table,
                        MandatoryCourses::CourseId,
                        Courses::Table,
                        Courses::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MandatoryCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserBadges::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(Badges::Table).to_owned()).await?;
        manager
            .drop_table(Table::drop().table(UserProgress::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssessmentAttempts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assessments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlockCompletions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LearningBlocks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseUnits::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(Units::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Courses::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Modules::Table).to_owned()).await?;
        manager
            .drop_table(Table::drop().table(TrainingAreas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccessTokens::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await?;
        Ok(())
    }
}
