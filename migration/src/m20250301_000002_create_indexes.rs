use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_tables::{Chapters, Courses, Enrollments, Feedbacks, Lessons};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 同一用户对同一课程只能选课一次
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_enrollments_user_course")
                    .table(Enrollments::Table)
                    .col(Enrollments::UserId)
                    .col(Enrollments::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 同一用户对同一课程只能评价一次
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_feedbacks_user_course")
                    .table(Feedbacks::Table)
                    .col(Feedbacks::UserId)
                    .col(Feedbacks::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 常用外键查询索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_category_id")
                    .table(Courses::Table)
                    .col(Courses::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_chapters_course_id")
                    .table(Chapters::Table)
                    .col(Chapters::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lessons_chapter_id")
                    .table(Lessons::Table)
                    .col(Lessons::ChapterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_feedbacks_course_id")
                    .table(Feedbacks::Table)
                    .col(Feedbacks::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_feedbacks_course_id")
                    .table(Feedbacks::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_lessons_chapter_id")
                    .table(Lessons::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_chapters_course_id")
                    .table(Chapters::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_category_id")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_feedbacks_user_course")
                    .table(Feedbacks::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_enrollments_user_course")
                    .table(Enrollments::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
